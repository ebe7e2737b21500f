//! Input decoding helpers shared by the CLI and the WASM bindings.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Resolve a WHATWG encoding label (`latin1`, `shift_jis`, ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::InvalidOption(format!("unknown encoding label: {label}")))
}

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (e.g. from `<meta charset>`)
/// 3. Falls back to Windows-1252 (common in legacy web pages and text dumps)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_text("Hello, World!".as_bytes(), None), "Hello, World!");
/// assert_eq!(decode_text(b"caf\xe9", None), "caf\u{e9}");
/// ```
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = Encoding::for_label(name.as_bytes())
    {
        log::debug!("input is not UTF-8, decoding as {}", encoding.name());
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    log::debug!("input is not UTF-8, falling back to windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Read a whole file and decode it with [`decode_text`].
pub fn read_text_file(path: &Path, hint_encoding: Option<&str>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes, hint_encoding).into_owned())
}

/// Read everything from a reader and decode it with [`decode_text`].
pub fn read_text<R: Read>(mut reader: R, hint_encoding: Option<&str>) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_text(&bytes, hint_encoding).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("n\u{e5}sty".as_bytes(), None), "n\u{e5}sty");
    }

    #[test]
    fn test_decode_utf8_borrows() {
        assert!(matches!(decode_text(b"plain", None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0x93/0x94 are curly double quotes in CP1252
        assert_eq!(decode_text(b"\x93hi\x94", None), "\u{201c}hi\u{201d}");
    }

    #[test]
    fn test_decode_with_hint() {
        // 0xE5 is a-ring in ISO-8859-1
        assert_eq!(decode_text(b"n\xe5sty", Some("iso-8859-1")), "n\u{e5}sty");
    }

    #[test]
    fn test_read_text_from_reader() {
        let text = read_text(&b"caf\xc3\xa9"[..], None).unwrap();
        assert_eq!(text, "caf\u{e9}");
    }

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, b"\x93quoted\x94").unwrap();
        assert_eq!(read_text_file(&path, None).unwrap(), "\u{201c}quoted\u{201d}");
    }

    #[test]
    fn test_resolve_encoding() {
        assert_eq!(resolve_encoding("latin1").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(resolve_encoding(" UTF-8 ").unwrap(), encoding_rs::UTF_8);
        assert!(matches!(resolve_encoding("klingon"), Err(Error::InvalidOption(_))));
    }
}
