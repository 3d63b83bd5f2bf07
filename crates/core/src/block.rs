//! Line classification and the block-level state machine.
//!
//! Each input line is classified on its own, then fed to a [`BlockParser`]
//! that tracks which block (if any) is open and emits the opening and closing
//! tags as lines move between block types.

use crate::ConvertOptions;
use crate::html::HtmlWriter;
use crate::inline::InlineRules;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed heading; `level` is the number of leading `#`.
    Heading {
        /// Count of leading `#` characters, unbounded.
        level: usize,
        /// Text after the `#` run, trimmed.
        content: &'a str,
    },
    /// `- ` item; holds the trimmed text after the marker.
    UnorderedItem(&'a str),
    /// `* ` item; holds the trimmed text after the marker.
    OrderedItem(&'a str),
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else; holds the trimmed line.
    Text(&'a str),
}

/// Classifies `line` after trimming surrounding whitespace.
///
/// Headings take priority over list markers, list markers over blank lines,
/// and everything else is paragraph text.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with('#') {
        let level = trimmed.bytes().take_while(|b| *b == b'#').count();
        return LineKind::Heading {
            level,
            content: trimmed[level..].trim(),
        };
    }
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return LineKind::UnorderedItem(rest.trim());
    }
    if let Some(rest) = trimmed.strip_prefix("* ") {
        return LineKind::OrderedItem(rest.trim());
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text(trimmed)
}

/// The two list flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`, opened by `- ` items.
    Unordered,
    /// `<ol>`, opened by `* ` items.
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// The block currently open. Only one can be open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockState {
    /// Nothing open.
    #[default]
    Idle,
    /// Inside a `<ul>` or `<ol>`.
    List(ListKind),
    /// Collecting paragraph lines, not yet inline-transformed.
    Paragraph(Vec<String>),
}

/// Line-by-line block parser for a single document.
pub struct BlockParser<'r> {
    options: ConvertOptions,
    inline: &'r InlineRules,
    state: BlockState,
    out: HtmlWriter,
    line_no: usize,
}

impl<'r> BlockParser<'r> {
    /// Creates a parser with nothing open.
    pub fn new(options: ConvertOptions, inline: &'r InlineRules) -> Self {
        Self {
            options,
            inline,
            state: BlockState::Idle,
            out: HtmlWriter::new(),
            line_no: 0,
        }
    }

    /// The block currently open.
    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Fragments emitted so far.
    pub fn fragments(&self) -> &[String] {
        self.out.fragments()
    }

    /// Processes one input line.
    pub fn feed(&mut self, line: &str) {
        self.line_no += 1;
        let kind = self.classify(line);
        log::trace!("line {}: {:?}", self.line_no, kind);

        match kind {
            LineKind::Heading { level, content } => {
                self.close_block();
                let html = self.inline.apply(content);
                self.out.push_element(&format!("h{level}"), &html);
            }
            LineKind::UnorderedItem(content) => self.list_item(ListKind::Unordered, content),
            LineKind::OrderedItem(content) => self.list_item(ListKind::Ordered, content),
            LineKind::Blank => self.close_block(),
            LineKind::Text(text) => self.paragraph_line(text),
        }
    }

    /// Closes whatever is still open and returns the assembled HTML.
    pub fn finish(mut self) -> String {
        self.close_block();
        self.out.finish()
    }

    fn classify<'l>(&self, line: &'l str) -> LineKind<'l> {
        match classify_line(line) {
            LineKind::UnorderedItem(_) | LineKind::OrderedItem(_) if !self.options.lists => {
                LineKind::Text(line.trim())
            }
            kind => kind,
        }
    }

    fn list_item(&mut self, kind: ListKind, content: &str) {
        if !matches!(self.state, BlockState::List(open) if open == kind) {
            self.close_block();
            self.out.push(kind.open_tag());
            self.state = BlockState::List(kind);
        }
        let html = self.inline.apply(content);
        self.out.push_element("li", &html);
    }

    fn paragraph_line(&mut self, text: &str) {
        if let BlockState::Paragraph(lines) = &mut self.state {
            lines.push(text.to_string());
            return;
        }

        self.close_block();
        if !self.options.paragraphs {
            log::debug!("line {}: dropping text, paragraphs disabled", self.line_no);
            return;
        }
        self.state = BlockState::Paragraph(vec![text.to_string()]);
    }

    fn close_block(&mut self) {
        match std::mem::take(&mut self.state) {
            BlockState::Idle => {}
            BlockState::List(kind) => self.out.push(kind.close_tag()),
            BlockState::Paragraph(lines) => self.flush_paragraph(&lines),
        }
    }

    /// Each line is transformed on its own so inline markup never spans lines.
    fn flush_paragraph(&mut self, lines: &[String]) {
        let Some((first, rest)) = lines.split_first() else {
            return;
        };
        self.out.push("<p>");
        self.out.push(self.inline.apply(first));
        for line in rest {
            self.out.push(format!("<br/>{}", self.inline.apply(line)));
        }
        self.out.push("</p>");
    }
}
