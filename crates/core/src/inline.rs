//! Inline rewrite rules applied to the text of headings, list items and
//! paragraph lines.
//!
//! Rules run in order, each as a full pass over the text produced by the
//! previous one. A later rule may therefore match markup that an earlier rule
//! emitted.

use std::borrow::Cow;
use std::ops::Range;

use md5::{Digest, Md5};

use crate::ConvertOptions;

/// A single text rewrite: given text, return the rewritten text.
pub trait InlineRule {
    /// Rewrite `input`, borrowing it unchanged when nothing matched.
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> InlineRule for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (self)(input)
    }
}

/// A paired-delimiter matcher: `open`, at least one character, then the
/// nearest `close` on the same line.
#[derive(Clone, Copy, Debug)]
pub struct Delimited {
    name: &'static str,
    open: &'static str,
    close: &'static str,
    build: fn(&str) -> String,
}

/// Location of one delimited match inside the scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Span {
    start: usize,
    content: Range<usize>,
    end: usize,
}

impl Delimited {
    /// Creates a matcher that replaces `open X close` with `build(X)`.
    pub const fn new(
        name: &'static str,
        open: &'static str,
        close: &'static str,
        build: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            open,
            close,
            build,
        }
    }

    /// `[[X]]` to the lowercase hex MD5 digest of `X`.
    pub const fn hash() -> Self {
        Self::new("hash", "[[", "]]", md5_hex)
    }

    /// `((X))` to `X` without any `c` or `C`.
    pub const fn remove_c() -> Self {
        Self::new("remove-c", "((", "))", strip_c)
    }

    /// `**X**` to `<b>X</b>`.
    pub const fn bold() -> Self {
        Self::new("bold", "**", "**", bold_tag)
    }

    /// `__X__` to `<em>X</em>`.
    pub const fn emphasis() -> Self {
        Self::new("emphasis", "__", "__", em_tag)
    }

    /// Rule name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn find_span(&self, text: &str, from: usize) -> Option<Span> {
        let start = from + text[from..].find(self.open)?;
        let content_start = start + self.open.len();
        // The content needs at least one character before the closer can match.
        let first = text[content_start..].chars().next()?;
        let search_from = content_start + first.len_utf8();
        let close_at = search_from + text[search_from..].find(self.close)?;
        Some(Span {
            start,
            content: content_start..close_at,
            end: close_at + self.close.len(),
        })
    }
}

impl InlineRule for Delimited {
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        // No closer after the first opener means no closer after any later one.
        let Some(first) = self.find_span(input, 0) else {
            return Cow::Borrowed(input);
        };

        let mut out = String::with_capacity(input.len());
        let mut cursor = 0;
        let mut next = Some(first);
        while let Some(span) = next {
            out.push_str(&input[cursor..span.start]);
            out.push_str(&(self.build)(&input[span.content]));
            cursor = span.end;
            next = self.find_span(input, cursor);
        }
        out.push_str(&input[cursor..]);
        Cow::Owned(out)
    }
}

fn md5_hex(content: &str) -> String {
    format!("{:x}", Md5::digest(content.as_bytes()))
}

fn strip_c(content: &str) -> String {
    content.chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
}

fn bold_tag(content: &str) -> String {
    format!("<b>{content}</b>")
}

fn em_tag(content: &str) -> String {
    format!("<em>{content}</em>")
}

/// Ordered sequence of inline rules.
#[derive(Default)]
pub struct InlineRules {
    rules: Vec<Box<dyn InlineRule>>,
}

impl InlineRules {
    /// An empty rule set; text passes through untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules enabled by `options`: directives first, emphasis last.
    pub fn for_options(options: &ConvertOptions) -> Self {
        let mut rules = Self::new();
        if options.directives {
            rules.push(Delimited::hash());
            rules.push(Delimited::remove_c());
        }
        if options.emphasis {
            rules.push(Delimited::bold());
            rules.push(Delimited::emphasis());
        }
        rules
    }

    /// Appends a rule; it runs after every rule already present.
    pub fn push<R: InlineRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule over `text` in order.
    pub fn apply(&self, text: &str) -> String {
        let mut current = Cow::Borrowed(text);
        for rule in &self.rules {
            let next = match rule.apply(current.as_ref()) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            current = Cow::Owned(next);
        }
        current.into_owned()
    }
}

/// Applies the full built-in rule set to a single span of text.
pub fn transform_inline(text: &str) -> String {
    InlineRules::for_options(&ConvertOptions::full()).apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_emphasis() {
        assert_eq!(
            transform_inline("**bold** and __ital__"),
            "<b>bold</b> and <em>ital</em>"
        );
    }

    #[test]
    fn hash_is_md5_hex() {
        let out = transform_inline("[[hello]]");
        assert_eq!(out, "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(out.len(), 32);
    }

    #[test]
    fn remove_c_is_case_insensitive() {
        assert_eq!(transform_inline("((cocoa))"), "ooa");
        assert_eq!(transform_inline("((Chocolate Cake))"), "hoolate ake");
    }

    #[test]
    fn matching_is_non_greedy() {
        assert_eq!(
            Delimited::bold().apply("**a** b **c**"),
            "<b>a</b> b <b>c</b>"
        );
        assert_eq!(
            Delimited::emphasis().apply("__a__b__"),
            "<em>a</em>b__"
        );
    }

    #[test]
    fn empty_content_does_not_match() {
        assert_eq!(Delimited::bold().apply("****"), "****");
        assert_eq!(Delimited::hash().apply("[[]]"), "[[]]");
    }

    #[test]
    fn content_may_start_with_delimiter_character() {
        assert_eq!(Delimited::bold().apply("***a**"), "<b>*a</b>");
        assert_eq!(Delimited::hash().apply("[[[a]]"), md5_hex("[a"));
        assert_eq!(Delimited::remove_c().apply("(((c)))"), "()");
    }

    #[test]
    fn unmatched_delimiters_pass_through() {
        for text in ["**open", "__open", "[[open", "((open", "close**", "a ** b"] {
            let out = Delimited::bold().apply(text);
            assert!(matches!(out, Cow::Borrowed(_)), "{text} should borrow");
            assert_eq!(transform_inline(text), text);
        }
    }

    #[test]
    fn later_rules_see_earlier_output() {
        assert_eq!(transform_inline("((__cat__))"), "<em>at</em>");
        assert_eq!(transform_inline("((**c**))"), "****");
    }

    #[test]
    fn multibyte_content() {
        assert_eq!(Delimited::bold().apply("**é**"), "<b>é</b>");
        assert_eq!(transform_inline("((çcé))"), "çé");
    }

    #[test]
    fn rules_follow_options() {
        let emphasis_only = InlineRules::for_options(&ConvertOptions {
            directives: false,
            ..ConvertOptions::full()
        });
        assert_eq!(emphasis_only.len(), 2);
        assert_eq!(emphasis_only.apply("[[x]] **y**"), "[[x]] <b>y</b>");

        let none = InlineRules::for_options(&ConvertOptions {
            directives: false,
            emphasis: false,
            ..ConvertOptions::full()
        });
        assert!(none.is_empty());
        assert_eq!(none.apply("**y**"), "**y**");
    }

    fn strong(input: &str) -> Cow<'_, str> {
        if input.contains("<b>") {
            Cow::Owned(input.replace("<b>", "<strong>").replace("</b>", "</strong>"))
        } else {
            Cow::Borrowed(input)
        }
    }

    #[test]
    fn functions_are_rules() {
        let mut rules = InlineRules::new();
        rules.push(Delimited::bold());
        rules.push(strong);
        assert_eq!(rules.apply("**x**"), "<strong>x</strong>");
        assert_eq!(rules.apply("plain"), "plain");
    }

    #[test]
    fn names() {
        assert_eq!(Delimited::hash().name(), "hash");
        assert_eq!(Delimited::remove_c().name(), "remove-c");
    }
}
