//! Unicode to plain-ASCII transliteration.
//!
//! The data is a port of Perl's Unidecode (via the `deunicode` crate) for the
//! pedantic tier, plus a table of visual lookalikes for the optical tier.
//! Both modes walk the same table; they only differ in which field wins.

use std::borrow::Cow;

use crate::data::{Builtin, CodepointTable, TransliterationEntry};
use crate::transcode::transcode;

/// Which rendering to prefer when an entry has both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preference {
    /// Phonetic/semantic rendering first (`ß` -> `ss`).
    #[default]
    Pedantic,
    /// Visual lookalike first (`ß` -> `B`).
    Optical,
}

impl Preference {
    /// Pick a rendering from `entry`, falling back to the other tier.
    pub fn select(self, entry: &TransliterationEntry) -> Option<&'static str> {
        match self {
            Preference::Pedantic => entry.pedantic.or(entry.optical),
            Preference::Optical => entry.optical.or(entry.pedantic),
        }
    }
}

/// Options for [`transliterate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransliterateOptions {
    /// Prefer optical (lookalike) renderings over pedantic ones.
    pub optical: bool,
}

impl TransliterateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_optical(mut self, optical: bool) -> Self {
        self.optical = optical;
        self
    }

    pub fn preference(&self) -> Preference {
        if self.optical {
            Preference::Optical
        } else {
            Preference::Pedantic
        }
    }
}

/// Transliterate Unicode (and accented Latin) text to plain ASCII.
///
/// Codepoints with no rendering in either tier vanish.
///
/// # Examples
///
/// ```
/// use sterile::transliterate;
///
/// assert_eq!(transliterate("ýůçký"), "yucky");
/// assert_eq!(transliterate("Straße"), "Strasse");
/// ```
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, TransliterateOptions::default())
}

/// Transliterate with explicit options.
///
/// ```
/// use sterile::{TransliterateOptions, transliterate_with};
///
/// let optical = TransliterateOptions::new().with_optical(true);
/// assert_eq!(transliterate_with("Straße", optical), "StraBe");
/// ```
pub fn transliterate_with(text: &str, options: TransliterateOptions) -> String {
    // Every ASCII character maps to itself in both built-in tiers
    if text.is_ascii() {
        return text.to_string();
    }
    transliterate_in(text, &Builtin, options.preference())
}

/// Transliterate against an arbitrary codepoint table.
pub fn transliterate_in<T>(text: &str, table: &T, preference: Preference) -> String
where
    T: CodepointTable + ?Sized,
{
    transcode(text, table, |entry, _| {
        preference.select(&entry?).map(Cow::Borrowed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Codepoint;
    use proptest::prelude::*;

    #[test]
    fn test_transliterate_accents() {
        assert_eq!(transliterate("ýůçký"), "yucky");
        assert_eq!(transliterate("n\u{e5}sty"), "nasty");
        assert_eq!(transliterate("cr\u{e8}me br\u{fb}l\u{e9}e"), "creme brulee");
    }

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(transliterate("Hello, world! 123"), "Hello, world! 123");
    }

    #[test]
    fn test_unmapped_vanishes() {
        // Supplementary-plane codepoints have no entry
        assert_eq!(transliterate("a\u{1F600}b"), "ab");
    }

    #[test]
    fn test_optical_prefers_lookalike() {
        let optical = TransliterateOptions::new().with_optical(true);
        assert_eq!(transliterate("\u{df}"), "ss");
        assert_eq!(transliterate_with("\u{df}", optical), "B");
        // Cyrillic Er looks like P but sounds like R
        assert_eq!(transliterate("\u{420}"), "R");
        assert_eq!(transliterate_with("\u{420}", optical), "P");
    }

    #[test]
    fn test_optical_falls_back_to_pedantic() {
        let optical = TransliterateOptions::new().with_optical(true);
        assert_eq!(transliterate_with("ýůçký", optical), "yucky");
    }

    struct UpperA;

    impl CodepointTable for UpperA {
        fn entry(&self, cp: Codepoint) -> Option<TransliterationEntry> {
            (cp.value() == 'a' as u32).then_some(TransliterationEntry {
                pedantic: Some("A"),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_custom_table_sees_ascii() {
        assert_eq!(transliterate_in("abc", &UpperA, Preference::Pedantic), "A");
        assert_eq!(transliterate_in("banana", &UpperA, Preference::Optical), "AAA");
    }

    #[test]
    fn test_preference_select() {
        let entry = TransliterationEntry {
            pedantic: None,
            optical: Some("o"),
            entity_name: Some("x"),
        };
        assert_eq!(Preference::Pedantic.select(&entry), Some("o"));
        assert_eq!(Preference::Optical.select(&entry), Some("o"));
        assert_eq!(Preference::Pedantic.select(&TransliterationEntry::default()), None);
    }

    proptest! {
        #[test]
        fn prop_transliterate_is_ascii(s in "\\PC*") {
            prop_assert!(transliterate(&s).is_ascii());
            prop_assert!(transliterate_with(&s, TransliterateOptions::new().with_optical(true)).is_ascii());
        }
    }
}
