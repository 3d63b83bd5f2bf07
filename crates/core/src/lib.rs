#![deny(missing_docs)]
//! markdown2html core: line-oriented block parsing and inline rewrite rules.

/// Line classification and the block state machine.
pub mod block;
/// The conversion pipeline.
pub mod convert;
/// Core error types.
pub mod error;
/// File-to-file conversion.
pub mod file;
/// HTML output buffer.
pub mod html;
/// Inline rewrite rules.
pub mod inline;
/// Conversion options and feature ladder presets.
pub mod options;

pub use block::{BlockParser, BlockState, LineKind, ListKind, classify_line};
pub use convert::{Converter, markdown_to_html};
pub use error::ConvertError;
pub use file::convert_file;
pub use html::HtmlWriter;
pub use inline::{Delimited, InlineRule, InlineRules, transform_inline};
pub use options::{ConvertOptions, FeatureLevel};
