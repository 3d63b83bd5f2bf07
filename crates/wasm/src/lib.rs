use markdown2html_core::{ConvertOptions, Converter, FeatureLevel};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Converter Config
// ============================================================================

/// Configuration accepted by the WASM convert function.
///
/// `level` picks a step of the feature ladder; the individual flags override it.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmConvertConfig {
    #[serde(default)]
    pub level: Option<FeatureLevel>,
    #[serde(default)]
    pub lists: Option<bool>,
    #[serde(default)]
    pub paragraphs: Option<bool>,
    #[serde(default)]
    pub emphasis: Option<bool>,
    #[serde(default)]
    pub directives: Option<bool>,
}

fn parse_config(config: JsValue) -> WasmConvertConfig {
    if config.is_undefined() || config.is_null() {
        return WasmConvertConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_options(cfg: &WasmConvertConfig) -> ConvertOptions {
    let base = cfg
        .level
        .map(ConvertOptions::for_level)
        .unwrap_or_else(ConvertOptions::full);
    ConvertOptions {
        lists: cfg.lists.unwrap_or(base.lists),
        paragraphs: cfg.paragraphs.unwrap_or(base.paragraphs),
        emphasis: cfg.emphasis.unwrap_or(base.emphasis),
        directives: cfg.directives.unwrap_or(base.directives),
    }
}

/// Converts with an already-parsed config. Shared by the JS entry point and tests.
pub fn convert_with_config(source: &str, cfg: &WasmConvertConfig) -> String {
    Converter::new(build_options(cfg)).convert(source)
}

// ============================================================================
// Convert API
// ============================================================================

/// Converts Markdown source to HTML.
///
/// # Arguments
///
/// * `source` - The Markdown text
/// * `config` - Optional configuration object (JsValue):
///   - `level`: `"headings" | "lists" | "paragraphs" | "emphasis" | "directives"`
///   - `lists`, `paragraphs`, `emphasis`, `directives`: booleans overriding the level
///
/// Invalid configuration falls back to every feature enabled.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { convert } from './markdown2html_wasm';
///
/// convert("# Hi\n- **a**");
/// // "<h1>Hi</h1>\n<ul>\n<li><b>a</b></li>\n</ul>"
///
/// convert("# Hi\n- **a**", { level: "lists" });
/// // "<h1>Hi</h1>\n<ul>\n<li>**a**</li>\n</ul>"
/// ```
#[wasm_bindgen]
pub fn convert(source: &str, config: JsValue) -> String {
    let cfg = parse_config(config);
    convert_with_config(source, &cfg)
}

/// Applies every inline rule to a single line of text.
#[wasm_bindgen(js_name = transformInline)]
pub fn transform_inline(text: &str) -> String {
    markdown2html_core::transform_inline(text)
}
