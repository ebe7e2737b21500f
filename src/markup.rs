//! Tag-aware text scanning.
//!
//! This is deliberately not an HTML parser. Markup is recognised with a
//! single tag grammar so that text-only transforms can skip over it:
//!
//! ```text
//! <  /?  name  (attr (\s+ attr)*)?  \s*  /?  >
//! name  = [\w:-]+
//! attr  = name (\s* = \s* value)?
//! value = [A-Za-z0-9]+ | '...' | "..."
//! ```
//!
//! Comments (`<!--...-->`), CDATA sections, processing instructions and
//! template tags (`<?...>`, `<%...>`) and declarations (`<!DOCTYPE ...>`) are
//! also treated as markup.
//!
//! [`strip_tags`] uses exactly that grammar. The rewriting scanners
//! ([`spans`], [`scan_text`], [`rewrite_text`]) also accept any `<...>` that
//! starts with a non-space character and contains no other `<`, so real-world
//! tags such as `<a href=page.html>` are never rewritten as text. A `<` that
//! opens none of these is ordinary text. Malformed or unterminated tags are
//! not recovered; they simply fail to match and stay in the text.

use std::sync::LazyLock;

use memchr::memrchr;
use regex::Regex;

/// Processing instructions and template tags: `<?php ... ?>`, `<% ... %>`.
static PROCESSING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[%?](?:php)?[^>]*>").unwrap());

/// HTML comments without an embedded `--`.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--(?:[^-]|-[^-])*-->").unwrap());

static CDATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!\[CDATA\[([^\]]*)\]\]>").unwrap());

const TAG_NAME: &str = r"[\w:-]+";
const TAG_VALUE: &str = r#"(?:[A-Za-z0-9]+|'[^']*'|"[^"]*")"#;

/// Comments, CDATA, processing instructions, declarations and elements.
fn strict_markup_pattern() -> String {
    let attr = format!(r"{TAG_NAME}(?:\s*=\s*{TAG_VALUE})?");
    let element = format!(r"</?{TAG_NAME}(?:\s+{attr}(?:\s+{attr})*)?\s*/?>");
    format!(
        r"<!--(?:[^-]|-[^-])*-->|(?i:<!\[CDATA\[[^\]]*\]\]>)|<[%?][^>]*>|<![A-Za-z][^>]*>|{element}"
    )
}

/// Markup as [`strip_tags`] sees it.
static STRICT_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&strict_markup_pattern()).unwrap());

/// Markup as the rewriting scanners see it: the strict forms first, then any
/// other `<...>`.
static LOOSE_MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}|<[^\s<>][^<>]*>", strict_markup_pattern())).unwrap()
});

/// A contiguous piece of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Markup, copied verbatim by rewrites.
    Tag(&'a str),
    /// Content between markup.
    Text(&'a str),
}

impl<'a> Span<'a> {
    /// The raw slice of input this span covers.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Span::Tag(s) | Span::Text(s) => s,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Span::Tag(_))
    }

    /// The content of a text span, or `None` for markup.
    pub fn text(self) -> Option<&'a str> {
        match self {
            Span::Text(s) => Some(s),
            Span::Tag(_) => None,
        }
    }
}

/// Iterator over the alternating tag and text spans of a string.
///
/// Concatenating every span's [`Span::as_str`] reproduces the input exactly.
/// Adjacent text is never split: a stray `<` stays inside the surrounding
/// text span.
///
/// Each call to `next` searches forward from the current position only, so a
/// full scan is linear in the input length.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    text: &'a str,
    pos: usize,
    grammar: &'static Regex,
    /// Every piece of markup ends with `>`, so nothing past the last one is
    /// searched.
    markup_end: usize,
    /// The next markup found while emitting the text before it.
    pending: Option<(usize, usize)>,
}

impl<'a> Spans<'a> {
    fn new(text: &'a str, grammar: &'static Regex) -> Self {
        let markup_end = memrchr(b'>', text.as_bytes()).map_or(0, |i| i + 1);
        Self {
            text,
            pos: 0,
            grammar,
            markup_end,
            pending: None,
        }
    }

    fn next_markup(&self) -> Option<(usize, usize)> {
        if self.pos >= self.markup_end {
            return None;
        }
        self.grammar
            .find_at(&self.text[..self.markup_end], self.pos)
            .map(|m| (m.start(), m.end()))
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        match self.pending.take().or_else(|| self.next_markup()) {
            Some((tag_start, tag_end)) if tag_start == start => {
                self.pos = tag_end;
                Some(Span::Tag(&self.text[start..tag_end]))
            }
            Some((tag_start, tag_end)) => {
                self.pending = Some((tag_start, tag_end));
                self.pos = tag_start;
                Some(Span::Text(&self.text[start..tag_start]))
            }
            None => {
                self.pos = self.text.len();
                Some(Span::Text(&self.text[start..]))
            }
        }
    }
}

/// Split `text` into tag and text spans.
///
/// ```
/// use sterile::markup::{Span, spans};
///
/// let parts: Vec<_> = spans("a<i>b</i>").collect();
/// assert_eq!(parts, vec![Span::Text("a"), Span::Tag("<i>"), Span::Text("b"), Span::Tag("</i>")]);
/// ```
pub fn spans(text: &str) -> Spans<'_> {
    Spans::new(text, &LOOSE_MARKUP_RE)
}

/// Options for [`strip_tags_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Keep the input's whitespace as-is instead of collapsing it.
    pub keep_whitespace: bool,
    /// Keep the content of CDATA sections as text (otherwise drop them).
    pub keep_cdata: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            keep_whitespace: false,
            keep_cdata: true,
        }
    }
}

impl StripOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    pub fn with_keep_cdata(mut self, keep: bool) -> Self {
        self.keep_cdata = keep;
        self
    }
}

/// Remove HTML/XML tags from text, including comments, PHP and ERB style
/// tags. CDATA content is kept as text and redundant whitespace is removed.
///
/// # Examples
///
/// ```
/// use sterile::strip_tags;
///
/// assert_eq!(strip_tags(r#"Visit <a href="http://example.com">site!</a>"#), "Visit site!");
/// assert_eq!(strip_tags("a <!-- note --> b <?php echo 1; ?>c"), "a b c");
/// ```
pub fn strip_tags(text: &str) -> String {
    strip_tags_with(text, StripOptions::default())
}

/// Remove tags with explicit options.
pub fn strip_tags_with(text: &str, options: StripOptions) -> String {
    let text = PROCESSING_RE.replace_all(text, "");
    let text = COMMENT_RE.replace_all(&text, "");
    let text = CDATA_RE.replace_all(&text, if options.keep_cdata { "$1" } else { "" });

    let stripped: String = Spans::new(&text, &STRICT_MARKUP_RE)
        .filter_map(Span::text)
        .collect();

    if options.keep_whitespace {
        stripped
    } else {
        trim_whitespace(&stripped)
    }
}

/// Iterate over the text between tags, in order. Markup is skipped.
///
/// ```
/// use sterile::scan_text;
///
/// let parts: Vec<&str> = scan_text("a<i>b</i>c").collect();
/// assert_eq!(parts, ["a", "b", "c"]);
/// ```
pub fn scan_text(text: &str) -> impl Iterator<Item = &str> + Clone + '_ {
    spans(text).filter_map(Span::text)
}

/// Replace every text span with `f(text)`, copying markup verbatim.
///
/// ```
/// use sterile::rewrite_text;
///
/// assert_eq!(rewrite_text("a<i>b</i>c", |s| s.to_uppercase()), "A<i>B</i>C");
/// ```
pub fn rewrite_text<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut result = String::with_capacity(text.len());
    for span in spans(text) {
        match span {
            Span::Tag(tag) => result.push_str(tag),
            Span::Text(content) => result.push_str(&f(content)),
        }
    }
    result
}

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// ```
/// use sterile::trim_whitespace;
///
/// assert_eq!(trim_whitespace("  Hello  world! "), "Hello world!");
/// ```
pub fn trim_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
