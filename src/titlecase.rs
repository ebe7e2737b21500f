//! Editorial title casing.
//!
//! The algorithm follows John Gruber's title case rules: every word is
//! capitalized except a closed list of small words (articles, short
//! prepositions and conjunctions), and those are capitalized again when they
//! open or close the title or a sub-phrase. URLs, e-mail addresses, paths and
//! words that already carry internal capitals (`iPhone`, `AT&T`) are left
//! alone.
//!
//! Casing runs in five passes over whitespace-normalized input. Each pass
//! assumes the decisions of the previous ones are final:
//!
//! 1. classify and case every word
//! 2. capitalize small words that open the title, a sub-sentence, or an
//!    inserted sub-phrase
//! 3. capitalize small words that close the title or a sub-phrase
//! 4. lowercase the letter after a single-letter hyphenated prefix (`E-mail`)
//! 5. normalize `q&a` to `Q&A`

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::trim_whitespace;

/// Small words, longest first wherever one is a prefix of another.
///
/// `at` is excluded when followed by `&t` (see [`is_at_and_t`]).
const SMALL_WORDS: &str = r"and|an|as|at|a|but|by|en|for|if|in|nor|of|on|or|the|to|via|vs\.?|v\.?";

/// Trailing possessive or contraction (`'s`, `’ll`), never re-cased.
const APOSTROPHE_SUFFIX: &str = r"(?:['’]\p{Ll}*)?";

/// ASCII punctuation and symbols plus Unicode punctuation.
const PUNCT: &str = r"[[:punct:]\p{P}]";

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"\b([_*]*)",
            r"(?:",
            r"([-+\w]+[@.:/][-\w@.:/]+)",         // URL, domain, path or e-mail
            r"|((?i:{small}))",                   // small word
            r"|(\p{{L}}[\p{{Ll}}'’()\[\]\{{\}}]*)", // word without internal caps
            r"|(\p{{L}}[\p{{L}}'’()\[\]\{{\}}]*)",  // any other word
            r")",
            r"({suffix})([_*]*)\b",
        ),
        small = SMALL_WORDS,
        suffix = APOSTROPHE_SUFFIX,
    );
    Regex::new(&pattern).unwrap()
});

static OPENING_SMALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"(?i)(^{PUNCT}*|[:.;?!] +| ['"“‘(\[] *)({SMALL_WORDS})\b"#
    );
    Regex::new(&pattern).unwrap()
});

static CLOSING_SMALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b({SMALL_WORDS})")).unwrap());

/// What must follow a small word for it to close the title or a sub-phrase.
static CLOSING_CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r#"^(?:{PUNCT}*$|['"’”)\]] )"#)).unwrap());

static HYPHEN_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\p{L}[-\x{2011}])(\p{L})").unwrap());

static QA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)q&a").unwrap());

/// How pass 1 treats a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// URL, domain, path or e-mail address: kept verbatim.
    UrlOrEmailOrPath,
    /// One of the small words: lowercased.
    SmallWord,
    /// No capitals after the first letter: capitalized.
    LowerInternalWord,
    /// Internal capitals (acronyms, brands): kept verbatim.
    MixedCaseWord,
}

/// A classified token from pass 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleWord<'a> {
    /// Leading `_`/`*` emphasis markers.
    pub lead: &'a str,
    pub class: WordClass,
    pub word: &'a str,
    /// Possessive or contraction suffix, carried through unchanged.
    pub suffix: &'a str,
    /// Trailing `_`/`*` emphasis markers.
    pub trail: &'a str,
}

impl<'a> TitleWord<'a> {
    /// Build from a [`WORD_RE`] match over `haystack`.
    fn from_captures(caps: &Captures<'a>, haystack: &'a str) -> Option<Self> {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());

        let (class, word) = if let Some(m) = caps.get(2) {
            (WordClass::UrlOrEmailOrPath, m.as_str())
        } else if let Some(m) = caps.get(3) {
            if is_at_and_t(m.as_str(), &haystack[m.end()..]) {
                (word_class(m.as_str()), m.as_str())
            } else {
                (WordClass::SmallWord, m.as_str())
            }
        } else if let Some(m) = caps.get(4) {
            (WordClass::LowerInternalWord, m.as_str())
        } else {
            (WordClass::MixedCaseWord, caps.get(5)?.as_str())
        };

        Some(Self {
            lead: group(1),
            class,
            word,
            suffix: group(6),
            trail: group(7),
        })
    }

    /// The token with pass 1 casing applied.
    pub fn render(&self) -> String {
        let word = match self.class {
            WordClass::UrlOrEmailOrPath | WordClass::MixedCaseWord => self.word.to_string(),
            WordClass::SmallWord => self.word.to_lowercase(),
            WordClass::LowerInternalWord => capitalize(self.word),
        };
        [self.lead, word.as_str(), self.suffix, self.trail].concat()
    }
}

/// `at` directly followed by `&t` is part of `AT&T`, not a preposition.
fn is_at_and_t(word: &str, rest: &str) -> bool {
    word.eq_ignore_ascii_case("at")
        && rest
            .get(..2)
            .is_some_and(|next| next.eq_ignore_ascii_case("&t"))
}

fn word_class(word: &str) -> WordClass {
    if word.chars().skip(1).any(char::is_uppercase) {
        WordClass::MixedCaseWord
    } else {
        WordClass::LowerInternalWord
    }
}

/// Lowercase everything, then uppercase the first character.
fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Classify every word of `text` the way pass 1 sees it.
///
/// `text` should already be whitespace-normalized.
pub fn classify_words(text: &str) -> Vec<TitleWord<'_>> {
    WORD_RE
        .captures_iter(text)
        .filter_map(|caps| TitleWord::from_captures(&caps, text))
        .collect()
}

/// Format text for use as a title.
///
/// This is much smarter than capitalizing every word: small words stay
/// lowercase mid-title, URLs and mixed-case words are preserved, and
/// sub-phrases are handled.
///
/// # Examples
///
/// ```
/// use sterile::titlecase;
///
/// assert_eq!(titlecase("Q&A: 'That's what happens'"), "Q&A: 'That's What Happens'");
/// assert_eq!(titlecase("the lord of the rings"), "The Lord of the Rings");
/// assert_eq!(titlecase("what is AT&T's problem?"), "What Is AT&T's Problem?");
/// ```
pub fn titlecase(text: &str) -> String {
    let mut title = trim_whitespace(text);
    if !title.chars().any(char::is_lowercase) {
        title = title.to_lowercase();
    }

    let title = case_words(&title);
    let title = capitalize_opening_small_words(&title);
    let title = capitalize_closing_small_words(&title);
    let title = lowercase_after_hyphen_prefix(&title);
    QA_RE.replace_all(&title, "Q&A").into_owned()
}

/// Pass 1.
fn case_words(title: &str) -> String {
    WORD_RE
        .replace_all(title, |caps: &Captures| {
            TitleWord::from_captures(caps, title)
                .map_or_else(|| caps[0].to_string(), |word| word.render())
        })
        .into_owned()
}

/// Pass 2.
fn capitalize_opening_small_words(title: &str) -> String {
    OPENING_SMALL_RE
        .replace_all(title, |caps: &Captures| {
            let (Some(opening), Some(word)) = (caps.get(1), caps.get(2)) else {
                return caps[0].to_string();
            };
            if is_at_and_t(word.as_str(), &title[word.end()..]) {
                return caps[0].to_string();
            }
            format!("{}{}", opening.as_str(), capitalize(word.as_str()))
        })
        .into_owned()
}

/// Pass 3. Case-sensitive: only small words pass 1 left lowercase qualify.
fn capitalize_closing_small_words(title: &str) -> String {
    CLOSING_SMALL_RE
        .replace_all(title, |caps: &Captures| {
            let Some(word) = caps.get(1) else {
                return caps[0].to_string();
            };
            let rest = &title[word.end()..];
            if CLOSING_CONTEXT_RE.is_match(rest) && !is_at_and_t(word.as_str(), rest) {
                capitalize(word.as_str())
            } else {
                word.as_str().to_string()
            }
        })
        .into_owned()
}

/// Pass 4.
fn lowercase_after_hyphen_prefix(title: &str) -> String {
    HYPHEN_PREFIX_RE
        .replace_all(title, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_lowercase())
        })
        .into_owned()
}
