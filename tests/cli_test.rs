//! Tests for the `sterile` command-line tool.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn sterile(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sterile"))
        .args(args)
        .output()
        .expect("failed to run sterile")
}

fn sterile_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sterile"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run sterile");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for sterile")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "sterile failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_slug_from_argument() {
    assert_eq!(stdout(&sterile(&["slug", "Hello world!"])), "hello-world\n");
    assert_eq!(
        stdout(&sterile(&["slug", "--delimiter", "_", "Hello world!"])),
        "hello_world\n"
    );
}

#[test]
fn test_transliterate_from_stdin() {
    let output = sterile_stdin(&["transliterate"], "ýůçký\n".as_bytes());
    assert_eq!(stdout(&output), "yucky\n");

    let output = sterile_stdin(&["transliterate", "--optical"], "Straße\n".as_bytes());
    assert_eq!(stdout(&output), "StraBe\n");
}

#[test]
fn test_strip_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, r#"Visit <a href="http://example.com">site!</a>"#).unwrap();

    let output = sterile(&["strip", "--file", path.to_str().unwrap()]);
    assert_eq!(stdout(&output), "Visit site!\n");
}

#[test]
fn test_legacy_encoded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.txt");
    // CP1252 curly quotes
    std::fs::write(&path, b"\x93hi\x94\n").unwrap();

    let output = sterile(&["plain", "-f", path.to_str().unwrap()]);
    assert_eq!(stdout(&output), "\"hi\"\n");
}

#[test]
fn test_smart_html() {
    let output = sterile(&["smart", "--html", r#"<a title="x">"Hi"</a>"#]);
    assert_eq!(stdout(&output), "<a title=\"x\">&ldquo;Hi&rdquo;</a>\n");
}

#[test]
fn test_scan_lines_and_json() {
    assert_eq!(stdout(&sterile(&["scan", "a<i>b</i>c"])), "a\nb\nc\n");
    assert_eq!(
        stdout(&sterile(&["scan", "--json", "a<i>b</i>c"])),
        "[\"a\",\"b\",\"c\"]\n"
    );
    assert_eq!(
        stdout(&sterile(&["scan", "--json", "--tags", "a<i>b"])),
        "[{\"text\":\"a\"},{\"tag\":\"<i>\"},{\"text\":\"b\"}]\n"
    );
}

#[test]
fn test_titlecase_and_entities() {
    assert_eq!(
        stdout(&sterile(&["titlecase", "the lord of the rings"])),
        "The Lord of the Rings\n"
    );
    assert_eq!(stdout(&sterile(&["encode", "“Hey”"])), "&ldquo;Hey&rdquo;\n");
    assert_eq!(stdout(&sterile(&["decode", "&deg;"])), "°\n");
}

#[test]
fn test_unknown_encoding_fails() {
    let output = sterile(&["decode", "--encoding", "klingon", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown encoding label: klingon"), "stderr: {stderr}");
}

#[test]
fn test_text_and_file_conflict() {
    let output = sterile(&["sterilize", "--file", "x.html", "text"]);
    assert!(!output.status.success());
}
