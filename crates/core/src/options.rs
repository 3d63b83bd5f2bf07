//! Conversion options and the feature ladder presets.

use serde::{Deserialize, Serialize};

/// Steps of the feature ladder, each one a superset of the previous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLevel {
    /// Headings only; every other line is dropped.
    Headings,
    /// Headings plus `- ` and `* ` lists.
    Lists,
    /// Adds paragraphs with `<br/>` line breaks.
    Paragraphs,
    /// Adds `**bold**` and `__emphasis__`.
    Emphasis,
    /// Adds the `[[hash]]` and `((remove-c))` directives.
    Directives,
}

/// Feature switches for a [`Converter`](crate::Converter).
///
/// Headings are always recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Recognise `- ` (unordered) and `* ` (ordered) list items.
    pub lists: bool,
    /// Collect prose lines into `<p>` blocks.
    pub paragraphs: bool,
    /// Apply the bold and emphasis inline rules.
    pub emphasis: bool,
    /// Apply the hash and remove-c inline directives.
    pub directives: bool,
}

impl ConvertOptions {
    /// Every feature enabled.
    pub const fn full() -> Self {
        Self::for_level(FeatureLevel::Directives)
    }

    /// Options matching one step of the feature ladder.
    pub const fn for_level(level: FeatureLevel) -> Self {
        let rank = level as u8;
        Self {
            lists: rank >= FeatureLevel::Lists as u8,
            paragraphs: rank >= FeatureLevel::Paragraphs as u8,
            emphasis: rank >= FeatureLevel::Emphasis as u8,
            directives: rank >= FeatureLevel::Directives as u8,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::full()
    }
}

impl From<FeatureLevel> for ConvertOptions {
    fn from(level: FeatureLevel) -> Self {
        Self::for_level(level)
    }
}
