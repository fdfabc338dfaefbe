//! Tests for free-text escaping

use trackport_core::{escape, TextFormat};

#[test]
fn test_json_collapses_newlines() {
    let out = escape("line1\n\nline2\n", TextFormat::Json);
    assert_eq!(out, "line1  line2");
    assert!(!out.contains('\n'));
}

#[test]
fn test_trims_surrounding_whitespace() {
    assert_eq!(escape("  \n padded text \n\t", TextFormat::Json), "padded text");
}

#[test]
fn test_json_escapes_quote_and_backslash() {
    let out = escape(r#"Use "\n" not '\r'"#, TextFormat::Json);
    assert_eq!(out, r#"Use \"\\n\" not '\\r'"#);

    // The escaped text embeds into a JSON string and decodes back
    let decoded: String = serde_json::from_str(&format!("\"{}\"", out)).unwrap();
    assert_eq!(decoded, r#"Use "\n" not '\r'"#);
}

#[test]
fn test_json_escaped_text_round_trips_through_parser() {
    let input = "He said \"a\\b\"\nand left";
    let out = escape(input, TextFormat::Json);
    let decoded: String = serde_json::from_str(&format!("\"{}\"", out)).unwrap();
    assert_eq!(decoded, "He said \"a\\b\" and left");
}

#[test]
fn test_xml_does_not_backslash_escape() {
    let out = escape("a \"quoted\" \\ value\n", TextFormat::Xml);
    assert_eq!(out, "a \"quoted\" \\ value");
}

#[test]
fn test_xml_escapes_markup() {
    let out = escape("List<String> & co", TextFormat::Xml);
    assert_eq!(out, "List&lt;String&gt; &amp; co");
}

#[test]
fn test_empty_text() {
    assert_eq!(escape("", TextFormat::Json), "");
    assert_eq!(escape("\n", TextFormat::Xml), "");
}
