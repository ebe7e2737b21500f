//! Sterilized plain text and URL slugs.

use crate::markup::strip_tags;
use crate::transliterate::transliterate;

/// Transliterate to ASCII and strip all markup.
///
/// The result is plain ASCII text with whitespace collapsed, which is the
/// safest form for filenames, search indexes and logs.
///
/// # Examples
///
/// ```
/// use sterile::sterilize;
///
/// assert_eq!(sterilize("<b>n\u{e5}sty</b>"), "nasty");
/// ```
pub fn sterilize(text: &str) -> String {
    strip_tags(&transliterate(text))
}

/// Options for [`sluggerize_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Joins the words of the slug.
    pub delimiter: String,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            delimiter: "-".to_string(),
        }
    }
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Generate a lowercase, hyphen-separated slug suitable for URLs.
///
/// # Examples
///
/// ```
/// use sterile::sluggerize;
///
/// assert_eq!(sluggerize("Hello world!"), "hello-world");
/// assert_eq!(sluggerize("Cr\u{e8}me <i>Br\u{fb}l\u{e9}e</i>"), "creme-brulee");
/// ```
pub fn sluggerize(text: &str) -> String {
    sluggerize_with(text, &SlugOptions::default())
}

/// Generate a slug joined by a custom delimiter.
///
/// Words are split on whitespace and on existing hyphens; every character
/// outside `[A-Za-z0-9-]` is dropped. Runs of separators collapse to a single
/// delimiter, and the slug never starts or ends with one.
pub fn sluggerize_with(text: &str, options: &SlugOptions) -> String {
    let clean = sterilize(text);

    let mut slug = String::with_capacity(clean.len());
    let mut pending = false;
    for c in clean.chars() {
        if c.is_ascii_alphanumeric() {
            if pending && !slug.is_empty() {
                slug.push_str(&options.delimiter);
            }
            slug.push(c.to_ascii_lowercase());
            pending = false;
        } else if c == '-' || c.is_whitespace() {
            pending = true;
        }
    }
    slug
}
