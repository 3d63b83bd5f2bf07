//! The conversion pipeline: block parsing with a configurable inline rule set.

use crate::block::BlockParser;
use crate::inline::{InlineRule, InlineRules};
use crate::{ConvertOptions, FeatureLevel};

/// Reusable Markdown to HTML converter.
///
/// Holds only configuration; each call to [`Converter::convert`] gets fresh
/// parser state.
pub struct Converter {
    options: ConvertOptions,
    rules: InlineRules,
}

impl Converter {
    /// Create a converter with the built-in inline rules enabled by `options`.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            rules: InlineRules::for_options(&options),
        }
    }

    /// Create a converter for one step of the feature ladder.
    pub fn for_level(level: FeatureLevel) -> Self {
        Self::new(ConvertOptions::for_level(level))
    }

    /// Add an inline rule; it runs after the built-in rules.
    pub fn add_rule<R: InlineRule + 'static>(&mut self, rule: R) {
        self.rules.push(rule);
    }

    /// Options this converter was built with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a whole document to HTML.
    pub fn convert(&self, input: &str) -> String {
        let mut parser = BlockParser::new(self.options, &self.rules);
        let mut lines = 0usize;
        for line in input.split('\n') {
            parser.feed(line);
            lines += 1;
        }
        let html = parser.finish();
        log::debug!("converted {lines} lines into {} bytes of HTML", html.len());
        html
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::full())
    }
}

/// Convert `input` with every feature enabled.
pub fn markdown_to_html(input: &str) -> String {
    Converter::default().convert(input)
}
