//! WASM bindings for browser-side text cleanup.
//!
//! This module exposes the text operations to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::ext::Operation;
use crate::slug::SlugOptions;
use crate::transliterate::TransliterateOptions;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Transliterate to plain ASCII, optionally preferring visual lookalikes.
#[wasm_bindgen]
pub fn transliterate(text: &str, optical: bool) -> String {
    crate::transliterate_with(text, TransliterateOptions::new().with_optical(optical))
}

#[wasm_bindgen(js_name = encodeEntities)]
pub fn encode_entities(text: &str) -> String {
    crate::encode_entities(text)
}

#[wasm_bindgen(js_name = decodeEntities)]
pub fn decode_entities(text: &str) -> String {
    crate::decode_entities(text)
}

#[wasm_bindgen(js_name = stripTags)]
pub fn strip_tags(text: &str) -> String {
    crate::strip_tags(text)
}

/// The text between tags, as a JS array of strings.
#[wasm_bindgen(js_name = scanText)]
pub fn scan_text(text: &str) -> Vec<String> {
    crate::scan_text(text).map(str::to_string).collect()
}

/// Smart typography; with `html`, only text between tags is rewritten and
/// the result is entity-encoded.
#[wasm_bindgen(js_name = smartFormat)]
pub fn smart_format(text: &str, html: bool) -> String {
    if html {
        crate::smart_format_tags(text)
    } else {
        crate::smart_format(text)
    }
}

#[wasm_bindgen(js_name = plainFormat)]
pub fn plain_format(text: &str, html: bool) -> String {
    if html {
        crate::plain_format_tags(text)
    } else {
        crate::plain_format(text)
    }
}

#[wasm_bindgen]
pub fn titlecase(text: &str) -> String {
    crate::titlecase(text)
}

#[wasm_bindgen]
pub fn sterilize(text: &str) -> String {
    crate::sterilize(text)
}

/// URL slug; an empty `delimiter` means `-`.
#[wasm_bindgen]
pub fn sluggerize(text: &str, delimiter: &str) -> String {
    let options = if delimiter.is_empty() {
        SlugOptions::default()
    } else {
        SlugOptions::new().with_delimiter(delimiter)
    };
    crate::sluggerize_with(text, &options)
}

/// Apply an operation by name, e.g. `"smart_format"` or `"strip-tags"`.
#[wasm_bindgen]
pub fn apply(operation: &str, text: &str) -> Result<String, JsValue> {
    let operation: Operation = operation
        .parse()
        .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
    Ok(operation.apply(text))
}
