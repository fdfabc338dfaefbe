//! Escaping of free text embedded in report records

/// Encoding rules a text value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Body of a JSON string literal
    Json,
    /// Character data of an XML element
    Xml,
}

/// Prepare a description for embedding: trim, collapse line breaks to
/// spaces, then apply the format's character escaping.
pub fn escape(text: &str, format: TextFormat) -> String {
    let collapsed = collapse_newlines(text);
    match format {
        TextFormat::Json => json_string_body(&collapsed),
        TextFormat::Xml => escape_xml(&collapsed),
    }
}

/// Trim surrounding whitespace and turn every remaining line break into a
/// single space. `\r\n` counts as one line break.
pub fn collapse_newlines(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('\n').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('\n').unwrap_or(trimmed);
    trimmed.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Body of a JSON string literal as serde_json writes it, without the
/// surrounding quotes.
fn json_string_body(text: &str) -> String {
    let quoted = serde_json::Value::from(text).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Escape markup characters for XML character data.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
