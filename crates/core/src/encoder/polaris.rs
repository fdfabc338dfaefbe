//! Polaris XML error encoding
//!
//! Each violation becomes one `<error>` element carrying a single `<event>`.
//! The format has no document header and no file manifest.

use std::io::{self, Write};

use super::{checker_name, Encoder, Record, LINK_TEXT};
use crate::config::ReportConfig;
use crate::escape::{escape, escape_xml, TextFormat};
use crate::format::ReportFormat;

const DOMAIN: &str = "STATIC_JAVA";
const SCORE: &str = "100";
const EVENT_TAG: &str = "PMD Violation";

/// Encoder for the Polaris XML import format
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarisEncoder;

impl PolarisEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for PolarisEncoder {
    fn format(&self) -> ReportFormat {
        ReportFormat::Polaris
    }

    fn write_header(&self, _out: &mut dyn Write, _config: &ReportConfig) -> io::Result<()> {
        Ok(())
    }

    fn separator(&self) -> &'static str {
        "\n"
    }

    fn write_record(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        error_element(record).write(out, 0)
    }

    fn write_footer(&self, out: &mut dyn Write, files: &[String]) -> io::Result<()> {
        // Terminate the last record's line; nothing else trails the list.
        if !files.is_empty() {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

fn error_element(record: &Record<'_>) -> XmlNode {
    let v = record.violation;

    XmlNode::Element(
        "error",
        vec![
            XmlNode::leaf("domain", DOMAIN),
            XmlNode::leaf("lang", &v.rule_language),
            XmlNode::leaf("checker", &checker_name(&v.rule_name)),
            XmlNode::leaf("type", &v.rule_name),
            XmlNode::leaf("subtype", &v.rule_name),
            XmlNode::leaf("file", record.path),
            XmlNode::leaf("function", &v.method_name),
            XmlNode::leaf("score", SCORE),
            XmlNode::leaf("ordered", "true"),
            XmlNode::Element(
                "event",
                vec![
                    XmlNode::leaf("main", "true"),
                    XmlNode::leaf("tag", EVENT_TAG),
                    XmlNode::Leaf(
                        "description",
                        escape(&v.description, TextFormat::Xml),
                    ),
                    XmlNode::Leaf("line", v.begin_line.to_string()),
                    XmlNode::leaf("file", record.path),
                    XmlNode::leaf("linkUrl", &v.external_info_url),
                    XmlNode::leaf("linkText", LINK_TEXT),
                ],
            ),
        ],
    )
}

/// Element tree with character data already escaped
#[derive(Debug, Clone, PartialEq)]
enum XmlNode {
    Leaf(&'static str, String),
    Element(&'static str, Vec<XmlNode>),
}

impl XmlNode {
    fn leaf(name: &'static str, text: &str) -> Self {
        XmlNode::Leaf(name, escape_xml(text))
    }

    fn write(&self, out: &mut dyn Write, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            out.write_all(b"\t")?;
        }
        match self {
            XmlNode::Leaf(name, text) => write!(out, "<{name}>{text}</{name}>"),
            XmlNode::Element(name, children) => {
                writeln!(out, "<{name}>")?;
                for child in children {
                    child.write(out, depth + 1)?;
                    out.write_all(b"\n")?;
                }
                for _ in 0..depth {
                    out.write_all(b"\t")?;
                }
                write!(out, "</{name}>")
            }
        }
    }
}
