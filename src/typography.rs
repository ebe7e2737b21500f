//! Smart typography: curly quotes, dashes, ellipses and symbol glyphs.
//!
//! [`smart_format`] runs a fixed, ordered list of [`RewriteRule`]s over the
//! text. Each rule sees the output of the one before it, and the order is
//! part of the behaviour: the quote-adjacent dash rules must run before the
//! bare `--` rule, apostrophes in contractions must be settled before the
//! generic quote-direction rules, and so on. Replacements only ever produce
//! typographic glyphs, so no later rule can re-match an earlier rule's output.
//!
//! [`plain_format`] goes the other way, turning glyphs (and entities) back
//! into ASCII digraphs.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::entities::{decode_entities, encode_entities};
use crate::markup::rewrite_text;

/// A single pattern -> replacement step.
///
/// The replacement uses `regex` expansion syntax (`${1}`). A rule may carry
/// a guard that vetoes a match based on the text right after it; this stands
/// in for a negative lookahead.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
    unless_followed_by: Option<fn(&str) -> bool>,
}

impl RewriteRule {
    /// Compile a regex rule.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Rules are fixed at compile
    /// time, so this is a programming error.
    pub fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            unless_followed_by: None,
        }
    }

    /// A rule matching `needle` literally.
    pub fn literal(needle: &str, replacement: &'static str) -> Self {
        Self::new(&regex::escape(needle), replacement)
    }

    /// Skip any match for which `veto` holds on the text following it.
    pub fn unless_followed_by(mut self, veto: fn(&str) -> bool) -> Self {
        self.unless_followed_by = Some(veto);
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply this rule everywhere in `text`. No match leaves `text` as is.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(veto) = self.unless_followed_by else {
            return self.pattern.replace_all(text, self.replacement);
        };

        self.pattern.replace_all(text, |caps: &Captures| match caps.get(0) {
            Some(whole) if veto(&text[whole.end()..]) => whole.as_str().to_string(),
            _ => {
                let mut expanded = String::new();
                caps.expand(self.replacement, &mut expanded);
                expanded
            }
        })
    }
}

/// Run `rules` in order, each over the previous rule's output.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> String {
    let mut text = text.to_string();
    for rule in rules {
        let changed = match rule.apply(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(changed) => Some(changed),
        };
        if let Some(changed) = changed {
            text = changed;
        }
    }
    text
}

fn starts_with_whitespace(rest: &str) -> bool {
    rest.starts_with(char::is_whitespace)
}

static SMART_FORMAT_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    let rules = vec![
        // Informal contractions that open with an apostrophe
        RewriteRule::literal("'tain't", "\u{2019}tain\u{2019}t"),
        RewriteRule::literal("'twere", "\u{2019}twere"),
        RewriteRule::literal("'twas", "\u{2019}twas"),
        RewriteRule::literal("'tis", "\u{2019}tis"),
        RewriteRule::literal("'twill", "\u{2019}twill"),
        RewriteRule::literal("'til", "\u{2019}til"),
        RewriteRule::literal("'bout", "\u{2019}bout"),
        RewriteRule::literal("'nuff", "\u{2019}nuff"),
        RewriteRule::literal("'round", "\u{2019}round"),
        RewriteRule::literal("'cause", "\u{2019}cause"),
        RewriteRule::literal("'cos", "\u{2019}cos"),
        RewriteRule::literal("i'm", "i\u{2019}m"),
        // Dashes; the quote-adjacent forms first
        RewriteRule::literal("--\"", "\u{2014}\u{201d}"),
        RewriteRule::literal("--'", "\u{2014}\u{2019}"),
        RewriteRule::literal("--", "\u{2014}"),
        RewriteRule::literal("...", "\u{2026}"),
        // Symbols
        RewriteRule::literal("(tm)", "\u{2122}"),
        RewriteRule::literal("(TM)", "\u{2122}"),
        RewriteRule::literal("(c)", "\u{a9}"),
        RewriteRule::literal("(C)", "\u{a9}"),
        RewriteRule::literal("(r)", "\u{ae}"),
        RewriteRule::literal("(R)", "\u{ae}"),
        // Plural possessive: dogs' bones
        RewriteRule::new(r"s'([^a-zA-Z0-9])", "s\u{2019}${1}"),
        // Closing double quote before a colon or semicolon
        RewriteRule::new(r#""([:;])"#, "\u{201d}${1}"),
        RewriteRule::new(r"(?m)'s$", "\u{2019}s"),
        // Abbreviated decades: '90s
        RewriteRule::new(r"'([0-9]{2}(?:’|')?s)", "\u{2019}${1}"),
        // Opening single quote
        RewriteRule::new(r#"(\s|^|"|\(|\[)'"#, "${1}\u{2018}"),
        // Feet and inches
        RewriteRule::new(r#"([0-9]+)""#, "${1}\u{2033}"),
        RewriteRule::new(r"([0-9]+)'", "${1}\u{2032}"),
        // Apostrophe inside a word
        RewriteRule::new(r"(\S)'([^'\s])", "${1}\u{2019}${2}"),
        // Opening double quote, unless it is followed by whitespace
        RewriteRule::new(r#"(\s|^|\(|\[)""#, "${1}\u{201c}")
            .unless_followed_by(starts_with_whitespace),
        // Every remaining double quote closes
        RewriteRule::new(r#"""#, "\u{201d}"),
        RewriteRule::new(r"'(\s|\.|$)", "\u{2019}${1}"),
        // Dimensions: 4x6
        RewriteRule::new(r"([0-9]+)x([0-9]+)", "${1}\u{d7}${2}"),
        RewriteRule::new(r"(?i)([a-z])'(t|d|s|ll|re|ve)\b", "${1}\u{2019}${2}"),
    ];
    log::debug!("compiled {} smart format rules", rules.len());
    rules
});

/// The ordered rule list used by [`smart_format`].
pub fn smart_format_rules() -> &'static [RewriteRule] {
    &SMART_FORMAT_RULES
}

/// Format text with proper "curly" quotes, em dashes, ellipses, and
/// copyright, trademark and registered glyphs.
///
/// # Examples
///
/// ```
/// use sterile::smart_format;
///
/// assert_eq!(
///     smart_format("\"He said, 'Away, Drake!'\""),
///     "“He said, ‘Away, Drake!’”"
/// );
/// assert_eq!(smart_format("Wait--what..."), "Wait—what…");
/// ```
pub fn smart_format(text: &str) -> String {
    apply_rules(text, smart_format_rules())
}

/// Like [`smart_format`], but for HTML/XML: only text between tags is
/// touched (attribute values keep their straight quotes) and the result is
/// entity-encoded so it is plain ASCII.
///
/// ```
/// use sterile::smart_format_tags;
///
/// assert_eq!(
///     smart_format_tags(r#"<a title="x">"Hi"</a>"#),
///     r#"<a title="x">&ldquo;Hi&rdquo;</a>"#
/// );
/// ```
pub fn smart_format_tags(text: &str) -> String {
    rewrite_text(text, |content| encode_entities(&smart_format(content)))
}

/// Alias for [`smart_format_tags`].
pub fn smart_format_html(text: &str) -> String {
    smart_format_tags(text)
}

/// ASCII digraph for a typographic glyph.
fn plain_glyph(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => "\"",
        '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => "'",
        '\u{2014}' => "--",
        '\u{2013}' => "-",
        '\u{2026}' => "...",
        '\u{2122}' => "(tm)",
        '\u{a9}' => "(c)",
        '\u{ae}' => "(r)",
        '\u{d7}' => "x",
        _ => return None,
    })
}

/// The reverse of [`smart_format`]: decode entities, then turn curly quotes,
/// dashes, ellipses and symbol glyphs into plain ASCII digraphs.
///
/// ```
/// use sterile::plain_format;
///
/// assert_eq!(plain_format("&#169; &copy; &#8482; &trade;"), "(c) (c) (tm) (tm)");
/// ```
pub fn plain_format(text: &str) -> String {
    let decoded = decode_entities(text);
    let mut result = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match plain_glyph(ch) {
            Some(plain) => result.push_str(plain),
            None => result.push(ch),
        }
    }
    result
}

/// Like [`plain_format`], but only between tags.
///
/// ```
/// use sterile::plain_format_tags;
///
/// assert_eq!(
///     plain_format_tags(r#"<i x="&copy;">&copy;</i>"#),
///     r#"<i x="&copy;">(c)</i>"#
/// );
/// ```
pub fn plain_format_tags(text: &str) -> String {
    rewrite_text(text, plain_format)
}
