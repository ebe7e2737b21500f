//! HTML character entity encoding and decoding.

use std::borrow::Cow;
use std::sync::LazyLock;

use memchr::memchr;
use regex::{Captures, Regex};

use crate::data::{Builtin, CodepointTable, EntityTable};
use crate::transcode::transcode;

/// Matches `&#NNN;`, `&#xHHH;` and `&name;` in a single left-to-right pass.
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,7})|([a-zA-Z0-9]+));").unwrap()
});

/// Printable ASCII is emitted as-is by the encoder.
fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Turn every character outside printable ASCII into an HTML entity.
///
/// Named entities are used where one exists; everything else becomes a
/// decimal numeric entity, so the output is always pure ASCII.
///
/// # Examples
///
/// ```
/// use sterile::encode_entities;
///
/// assert_eq!(
///     encode_entities("“Economy Hits Bottom,” ran the headline"),
///     "&ldquo;Economy Hits Bottom,&rdquo; ran the headline"
/// );
/// assert_eq!(encode_entities("\u{1F600}"), "&#128512;");
/// ```
pub fn encode_entities(text: &str) -> String {
    // No built-in entry rewrites printable ASCII
    if text.chars().all(is_printable_ascii) {
        return text.to_string();
    }
    encode_entities_in(text, &Builtin)
}

/// Encode against an arbitrary codepoint table.
pub fn encode_entities_in<T>(text: &str, table: &T) -> String
where
    T: CodepointTable + ?Sized,
{
    transcode(text, table, |entry, ch| {
        if is_printable_ascii(ch) {
            return Some(match entry.and_then(|e| e.pedantic) {
                Some(identity) => Cow::Borrowed(identity),
                None => Cow::Owned(ch.to_string()),
            });
        }

        Some(Cow::Owned(match entry.and_then(|e| e.entity_name) {
            Some(name) => format!("&{name};"),
            None => format!("&#{};", ch as u32),
        }))
    })
}

/// Turn named and numeric entities back into the characters they stand for.
///
/// - `&#176;` and `&#xB0;` always decode (1-7 digits), independent of any table
/// - `&deg;` decodes through the entity table
/// - unknown names, and numbers that are not Unicode scalar values, are left
///   exactly as written
///
/// Decoding is a single pass: `&#38;amp;` becomes `&amp;`, not `&`.
///
/// # Examples
///
/// ```
/// use sterile::decode_entities;
///
/// assert_eq!(decode_entities("&ldquo;Hey&rdquo; you"), "“Hey” you");
/// assert_eq!(decode_entities("&#38;amp;"), "&amp;");
/// assert_eq!(decode_entities("&bogus;"), "&bogus;");
/// ```
pub fn decode_entities(text: &str) -> String {
    decode_entities_in(text, &Builtin)
}

/// Decode against an arbitrary entity table.
pub fn decode_entities_in<E>(text: &str, entities: &E) -> String
where
    E: EntityTable + ?Sized,
{
    if memchr(b'&', text.as_bytes()).is_none() {
        return text.to_string();
    }

    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
            } else {
                caps.get(3).and_then(|name| entities.codepoint(name.as_str()))
            };

            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
