//! # sterile
//!
//! Fast, table-driven text cleanup for the web.
//!
//! ## Features
//!
//! - Transliterate Unicode to plain ASCII, by sound or by looks
//! - Encode and decode HTML character entities
//! - Strip, scan and rewrite text around HTML/XML tags
//! - Smart typography (curly quotes, dashes, ellipses) and its reverse
//! - Editorial title casing
//! - Sterilized plain text and URL slugs
//!
//! ## Quick Start
//!
//! ```
//! use sterile::{sluggerize, smart_format, sterilize, titlecase, transliterate};
//!
//! assert_eq!(transliterate("ýůçký"), "yucky");
//! assert_eq!(sterilize("<b>nåsty</b>"), "nasty");
//! assert_eq!(sluggerize("Hello world!"), "hello-world");
//! assert_eq!(smart_format("\"Hi\" -- you..."), "“Hi” — you…");
//! assert_eq!(titlecase("the lord of the rings"), "The Lord of the Rings");
//! ```
//!
//! ## Markup
//!
//! Tag-aware operations never parse a document. They split the input into
//! tag and text spans with a regex tag grammar and only touch the text:
//!
//! ```
//! use sterile::{rewrite_text, strip_tags};
//!
//! assert_eq!(strip_tags(r#"Visit <a href="http://example.com">site!</a>"#), "Visit site!");
//! assert_eq!(rewrite_text("a<i>b</i>c", |s| s.to_uppercase()), "A<i>B</i>C");
//! ```
//!
//! Every operation is also available as a method through [`StrExt`].

pub mod data;
pub mod entities;
pub mod error;
pub mod ext;
pub mod markup;
pub mod slug;
pub mod titlecase;
pub mod transcode;
pub mod transliterate;
pub mod typography;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use entities::{decode_entities, encode_entities};
pub use error::{Error, Result};
pub use ext::{Operation, StrExt};
pub use markup::{StripOptions, rewrite_text, scan_text, strip_tags, strip_tags_with, trim_whitespace};
pub use slug::{SlugOptions, sluggerize, sluggerize_with, sterilize};
pub use titlecase::titlecase;
pub use transliterate::{TransliterateOptions, transliterate, transliterate_with};
pub use typography::{
    plain_format, plain_format_tags, smart_format, smart_format_html, smart_format_tags,
};
