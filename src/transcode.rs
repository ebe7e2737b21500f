//! The per-codepoint walk shared by transliteration and entity encoding.

use std::borrow::Cow;

use crate::data::{Codepoint, CodepointTable, TransliterationEntry};

/// Walk `text` one scalar value at a time, hand each one and its table entry
/// to `f`, and concatenate whatever `f` returns.
///
/// `f` returning `None` means "this codepoint contributes nothing"; the walk
/// always continues with the next codepoint. Codepoints are visited strictly
/// in order, and any codepoint may expand to zero or many output characters.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use sterile::data::Builtin;
/// use sterile::transcode::transcode;
///
/// let upper = transcode("a\u{e9}b", &Builtin, |entry, ch| {
///     if ch.is_ascii() {
///         Some(Cow::Owned(ch.to_ascii_uppercase().to_string()))
///     } else {
///         entry?.pedantic.map(Cow::Borrowed)
///     }
/// });
/// assert_eq!(upper, "AeB");
/// ```
pub fn transcode<T, F>(text: &str, table: &T, mut f: F) -> String
where
    T: CodepointTable + ?Sized,
    F: FnMut(Option<TransliterationEntry>, char) -> Option<Cow<'static, str>>,
{
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        let entry = table.entry(Codepoint::from(ch));
        if let Some(piece) = f(entry, ch) {
            result.push_str(&piece);
        }
    }

    result
}
