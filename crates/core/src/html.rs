//! Append-only HTML output buffer.

/// Collects HTML fragments, one per output line.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    fragments: Vec<String>,
}

impl HtmlWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends `<tag>content</tag>` as a single fragment.
    pub fn push_element(&mut self, tag: &str, content: &str) {
        self.fragments.push(format!("<{tag}>{content}</{tag}>"));
    }

    /// Fragments written so far.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Joins all fragments with `\n`. No trailing newline is added.
    pub fn finish(self) -> String {
        self.fragments.join("\n")
    }
}
