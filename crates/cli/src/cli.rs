//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Convert a Markdown file to HTML
#[derive(Parser, Debug)]
#[command(name = "markdown2html")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markdown file to read
    pub input: PathBuf,

    /// HTML file to write (created or truncated)
    pub output: PathBuf,
}
