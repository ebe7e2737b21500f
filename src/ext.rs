//! Method-call syntax for every text operation, and lookup by name.

use std::fmt;
use std::str::FromStr;

use crate::entities::{decode_entities, encode_entities};
use crate::error::Error;
use crate::markup::{rewrite_text, scan_text, strip_tags, trim_whitespace};
use crate::slug::{SlugOptions, sluggerize, sluggerize_with, sterilize};
use crate::titlecase::titlecase;
use crate::transliterate::{TransliterateOptions, transliterate, transliterate_with};
use crate::typography::{plain_format, plain_format_tags, smart_format, smart_format_tags};

/// Extension methods on `str`.
///
/// ```
/// use sterile::StrExt;
///
/// assert_eq!("<b>Cr\u{e8}me</b>".sterilize(), "Creme");
/// assert_eq!("the lord of the rings".titlecase(), "The Lord of the Rings");
/// ```
pub trait StrExt {
    fn transliterate(&self) -> String;
    fn transliterate_with(&self, options: TransliterateOptions) -> String;
    fn encode_entities(&self) -> String;
    fn decode_entities(&self) -> String;
    fn strip_tags(&self) -> String;
    fn scan_text(&self) -> Vec<&str>;
    fn rewrite_text<F: FnMut(&str) -> String>(&self, f: F) -> String;
    fn trim_whitespace(&self) -> String;
    fn smart_format(&self) -> String;
    fn smart_format_tags(&self) -> String;
    fn plain_format(&self) -> String;
    fn plain_format_tags(&self) -> String;
    fn titlecase(&self) -> String;
    fn sterilize(&self) -> String;
    fn sluggerize(&self) -> String;
    fn sluggerize_with(&self, options: &SlugOptions) -> String;
}

impl StrExt for str {
    fn transliterate(&self) -> String {
        transliterate(self)
    }

    fn transliterate_with(&self, options: TransliterateOptions) -> String {
        transliterate_with(self, options)
    }

    fn encode_entities(&self) -> String {
        encode_entities(self)
    }

    fn decode_entities(&self) -> String {
        decode_entities(self)
    }

    fn strip_tags(&self) -> String {
        strip_tags(self)
    }

    fn scan_text(&self) -> Vec<&str> {
        scan_text(self).collect()
    }

    fn rewrite_text<F: FnMut(&str) -> String>(&self, f: F) -> String {
        rewrite_text(self, f)
    }

    fn trim_whitespace(&self) -> String {
        trim_whitespace(self)
    }

    fn smart_format(&self) -> String {
        smart_format(self)
    }

    fn smart_format_tags(&self) -> String {
        smart_format_tags(self)
    }

    fn plain_format(&self) -> String {
        plain_format(self)
    }

    fn plain_format_tags(&self) -> String {
        plain_format_tags(self)
    }

    fn titlecase(&self) -> String {
        titlecase(self)
    }

    fn sterilize(&self) -> String {
        sterilize(self)
    }

    fn sluggerize(&self) -> String {
        sluggerize(self)
    }

    fn sluggerize_with(&self, options: &SlugOptions) -> String {
        sluggerize_with(self, options)
    }
}

/// A whole-string operation selectable by name (CLI, WASM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Transliterate,
    TransliterateOptical,
    EncodeEntities,
    DecodeEntities,
    StripTags,
    TrimWhitespace,
    SmartFormat,
    SmartFormatTags,
    PlainFormat,
    PlainFormatTags,
    Titlecase,
    Sterilize,
    Sluggerize,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::Transliterate,
        Operation::TransliterateOptical,
        Operation::EncodeEntities,
        Operation::DecodeEntities,
        Operation::StripTags,
        Operation::TrimWhitespace,
        Operation::SmartFormat,
        Operation::SmartFormatTags,
        Operation::PlainFormat,
        Operation::PlainFormatTags,
        Operation::Titlecase,
        Operation::Sterilize,
        Operation::Sluggerize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Transliterate => "transliterate",
            Operation::TransliterateOptical => "transliterate_optical",
            Operation::EncodeEntities => "encode_entities",
            Operation::DecodeEntities => "decode_entities",
            Operation::StripTags => "strip_tags",
            Operation::TrimWhitespace => "trim_whitespace",
            Operation::SmartFormat => "smart_format",
            Operation::SmartFormatTags => "smart_format_tags",
            Operation::PlainFormat => "plain_format",
            Operation::PlainFormatTags => "plain_format_tags",
            Operation::Titlecase => "titlecase",
            Operation::Sterilize => "sterilize",
            Operation::Sluggerize => "sluggerize",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Operation::Transliterate => text.transliterate(),
            Operation::TransliterateOptical => {
                text.transliterate_with(TransliterateOptions::new().with_optical(true))
            }
            Operation::EncodeEntities => text.encode_entities(),
            Operation::DecodeEntities => text.decode_entities(),
            Operation::StripTags => text.strip_tags(),
            Operation::TrimWhitespace => text.trim_whitespace(),
            Operation::SmartFormat => text.smart_format(),
            Operation::SmartFormatTags => text.smart_format_tags(),
            Operation::PlainFormat => text.plain_format(),
            Operation::PlainFormatTags => text.plain_format_tags(),
            Operation::Titlecase => text.titlecase(),
            Operation::Sterilize => text.sterilize(),
            Operation::Sluggerize => text.sluggerize(),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts the snake_case name, or the same with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_match_free_functions() {
        let s = "<p>\u{201c}Caf\u{e9}\u{201d} &amp; co</p>";
        assert_eq!(s.transliterate(), transliterate(s));
        assert_eq!(s.encode_entities(), encode_entities(s));
        assert_eq!(s.decode_entities(), decode_entities(s));
        assert_eq!(s.strip_tags(), strip_tags(s));
        assert_eq!(s.sterilize(), "\"Cafe\" &amp; co");
        assert_eq!(s.sluggerize(), "cafe-amp-co");
    }

    #[test]
    fn test_scan_and_rewrite() {
        assert_eq!("a<i>b</i>c".scan_text(), ["a", "b", "c"]);
        assert_eq!("a<i>b</i>c".rewrite_text(|t| t.to_uppercase()), "A<i>B</i>C");
    }

    #[test]
    fn test_operation_by_name() {
        let op: Operation = "smart-format".parse().unwrap();
        assert_eq!(op, Operation::SmartFormat);
        assert_eq!(op.apply("a--b"), "a\u{2014}b");
        assert_eq!("SLUGGERIZE".parse::<Operation>().unwrap(), Operation::Sluggerize);
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operation() {
        let err = "frobnicate".parse::<Operation>().unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(ref name) if name == "frobnicate"));
    }

    #[test]
    fn test_owned_strings_deref() {
        let owned = String::from("  Hello  world! ");
        assert_eq!(owned.trim_whitespace(), "Hello world!");
    }
}
