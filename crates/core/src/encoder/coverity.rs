//! Coverity `cov-import-results` JSON encoding
//!
//! Each record is a typed [`Issue`] handed to serde_json's pretty printer
//! with tab indentation. Field declaration order is the output order.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

use super::{checker_name, Encoder, Record, LINK_TEXT};
use crate::classify::{classify, Impact, IssueKind};
use crate::config::ReportConfig;
use crate::escape::collapse_newlines;
use crate::format::ReportFormat;

const EXTRA: &str = "PMD violations";
const EVENT_TAG: &str = "PMD violation";
const SOURCE_ENCODING: &str = "ASCII";

/// Indentation of a record inside the `issues` array
const RECORD_INDENT: &[u8] = b"\t\t";

/// Encoder for the Coverity JSON import format
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverityEncoder;

impl CoverityEncoder {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Issue<'a> {
    checker: String,
    extra: &'a str,
    file: &'a str,
    function: &'a str,
    subcategory: &'a str,
    properties: Properties<'a>,
    events: Vec<Event<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Properties<'a> {
    #[serde(rename = "type")]
    rule: &'a str,
    category: String,
    impact: Impact,
    long_description: String,
    local_effect: &'a str,
    issue_kind: IssueKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Event<'a> {
    tag: &'a str,
    file: &'a str,
    link_url: &'a str,
    link_text: &'a str,
    description: String,
    line: u32,
    main: bool,
}

/// One entry of the trailing `sources` manifest
#[derive(Debug, Serialize)]
struct Source<'a> {
    file: &'a str,
    encoding: &'a str,
}

impl<'a> Issue<'a> {
    fn from_record(record: &Record<'a>) -> Self {
        let v = record.violation;
        let class = classify(&v.rule_group, v.priority, &v.rule_name);

        Issue {
            checker: checker_name(&v.rule_name),
            extra: EXTRA,
            file: &v.filename,
            function: &v.method_name,
            subcategory: class.subcategory,
            properties: Properties {
                rule: &v.rule_name,
                category: class.category,
                impact: class.impact,
                long_description: collapse_newlines(&v.description),
                local_effect: class.local_effect,
                issue_kind: class.issue_kind,
            },
            events: vec![Event {
                tag: EVENT_TAG,
                file: record.path,
                link_url: &v.external_info_url,
                link_text: LINK_TEXT,
                description: collapse_newlines(v.event_description()),
                line: v.begin_line,
                main: true,
            }],
        }
    }
}

impl Encoder for CoverityEncoder {
    fn format(&self) -> ReportFormat {
        ReportFormat::Coverity
    }

    fn write_header(&self, out: &mut dyn Write, config: &ReportConfig) -> io::Result<()> {
        write!(
            out,
            "{{\n\t\"header\": {{\n\t\t\"version\": {},\n\t\t\"format\": \"{}\"\n\t}},\n\t\"issues\": [\n",
            config.format_version, config.format_name
        )
    }

    fn separator(&self) -> &'static str {
        ",\n"
    }

    fn write_record(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        Issue::from_record(record).serialize(&mut ser)?;
        write_indented(out, &buf, RECORD_INDENT)
    }

    fn write_footer(&self, out: &mut dyn Write, files: &[String]) -> io::Result<()> {
        out.write_all(b"\n\t],\n\t\"sources\": [\n")?;
        for (i, file) in files.iter().enumerate() {
            if i > 0 {
                out.write_all(b",\n")?;
            }
            out.write_all(RECORD_INDENT)?;
            let source = Source {
                file,
                encoding: SOURCE_ENCODING,
            };
            serde_json::to_writer(&mut *out, &source)?;
        }
        out.write_all(b"\n\t]\n}\n")
    }
}

/// Write pretty-printed JSON with every line shifted right by `indent`.
///
/// serde_json escapes line breaks inside strings, so every raw `\n` is
/// a line boundary.
fn write_indented(out: &mut dyn Write, json: &[u8], indent: &[u8]) -> io::Result<()> {
    for (i, line) in json.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(indent)?;
        out.write_all(line)?;
    }
    Ok(())
}
