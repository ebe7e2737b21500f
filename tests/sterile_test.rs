//! End-to-end tests of the public text API.
//!
//! The first group pins one reference case per operation; the rest run the
//! transforms over a small HTML document.

use sterile::markup::spans;
use sterile::{
    StrExt, decode_entities, encode_entities, plain_format, plain_format_tags, rewrite_text,
    scan_text, sluggerize, smart_format, smart_format_tags, sterilize, strip_tags, titlecase,
    transliterate, trim_whitespace,
};

const SAMPLE_HTML: &str = include_str!("fixtures/sample.html");

// ============================================================================
// Reference behavior
// ============================================================================

#[test]
fn test_decode_entities() {
    assert_eq!(decode_entities(""), "");
    assert_eq!(decode_entities("xyz"), "xyz");
    assert_eq!(decode_entities("&ldquo;Hey&rdquo; you"), "“Hey” you");

    for s in ["&#176;", "&#000176;", "&#x000b0;", "&#x000B0;", "&deg;"] {
        assert_eq!(decode_entities(s), "°", "decoding {s}");
    }

    assert_eq!(decode_entities("&#38;amp;"), "&amp;");
}

#[test]
fn test_encode_entities() {
    assert_eq!(encode_entities("“Hey” you"), "&ldquo;Hey&rdquo; you");
}

#[test]
fn test_rewrite_text() {
    assert_eq!(rewrite_text("a<i>b</i>c", |s| s.to_uppercase()), "A<i>B</i>C");
}

#[test]
fn test_plain_format() {
    assert_eq!(plain_format("&#169; &copy; &#8482; &trade;"), "(c) (c) (tm) (tm)");
}

#[test]
fn test_plain_format_tags() {
    assert_eq!(
        plain_format_tags(r#"<i x="&copy;">&copy;</i>"#),
        r#"<i x="&copy;">(c)</i>"#
    );
}

#[test]
fn test_scan_text() {
    let text: Vec<&str> = scan_text("a<i>b</i>c").collect();
    assert_eq!(text, ["a", "b", "c"]);
}

#[test]
fn test_sluggerize() {
    assert_eq!(sluggerize("Hello world!"), "hello-world");
}

#[test]
fn test_smart_format() {
    assert_eq!(
        smart_format("\"He said, 'Away, Drake!'\""),
        "“He said, ‘Away, Drake!’”"
    );
}

#[test]
fn test_sterilize() {
    assert_eq!(sterilize("<b>nåsty</b>"), "nasty");
}

#[test]
fn test_strip_tags() {
    assert_eq!(
        strip_tags(r#"Visit <a href="http://example.com">site!</a>"#),
        "Visit site!"
    );
}

#[test]
fn test_titlecase() {
    assert_eq!(
        titlecase("Q&A: 'That's what happens'"),
        "Q&A: 'That's What Happens'"
    );
}

#[test]
fn test_transliterate() {
    assert_eq!(transliterate("ýůçký"), "yucky");
}

#[test]
fn test_trim_whitespace() {
    assert_eq!(trim_whitespace(" Hello  world! "), "Hello world!");
}

// ============================================================================
// HTML document
// ============================================================================

#[test]
fn test_document_spans_reconstruct_input() {
    let joined: String = spans(SAMPLE_HTML).map(|span| span.as_str()).collect();
    assert_eq!(joined, SAMPLE_HTML);
}

#[test]
fn test_document_scan_skips_markup() {
    let text: Vec<&str> = scan_text(SAMPLE_HTML)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(text[0], "Crème brûlée -- a history");
    assert_eq!(text[1], "the history of crème brûlée");
    assert!(text.iter().all(|s| !s.contains("generated by hand")));
    assert!(text.iter().all(|s| !s.starts_with("<!")));
}

#[test]
fn test_document_sterilize() {
    let clean = sterilize(SAMPLE_HTML);
    assert!(clean.is_ascii());
    assert!(clean.starts_with("Creme brulee -- a history the history of creme brulee"));
    // Entities are text to the tag stripper
    assert!(clean.contains("Fa&ccedil;ade&nbsp;&mdash; Strasse (c) 2009"));
    // CDATA content survives as text
    assert!(clean.ends_with("if (a < b) { go(); }"));
    assert!(!clean.contains("<p"));
}

#[test]
fn test_document_smart_format_tags() {
    let smart = smart_format_tags(SAMPLE_HTML);
    assert!(smart.is_ascii());
    assert!(smart.contains(
        "<p>&ldquo;It&rsquo;s simple,&rdquo; said the chef. \
         &lsquo;Cream, sugar, eggs&hellip; that&rsquo;s all.&rsquo;</p>"
    ));
    assert!(smart.contains("<title>Cr&egrave;me br&ucirc;l&eacute;e &mdash; a history</title>"));
    assert!(smart.contains("6&times;9 dish"));
    assert!(smart.contains("&copy; 2009"));
    // Attribute values keep their straight quotes
    assert!(smart.contains(r#"<p title="Don't curl me">"#));
    assert!(smart.contains(r#"<a href="http://example.com/?q=1&amp;r=2">"#));
}

#[test]
fn test_document_smart_then_plain_restores_quotes() {
    let smart = smart_format_tags(SAMPLE_HTML);
    let plain = plain_format_tags(&smart);
    assert!(plain.contains(
        "<p>\"It's simple,\" said the chef. 'Cream, sugar, eggs... that's all.'</p>"
    ));
}

#[test]
fn test_document_titlecase_headings() {
    let titled = rewrite_text(SAMPLE_HTML, |text| {
        if text.trim().is_empty() {
            text.to_string()
        } else {
            titlecase(text)
        }
    });
    assert!(titled.contains("<h1 class=\"title\">The History of Crème Brûlée</h1>"));
}

#[test]
fn test_str_ext_chains() {
    let slug = "<h1>Crème &amp; Brûlée</h1>".decode_entities().sluggerize();
    assert_eq!(slug, "creme-brulee");
}
