//! Per-format record encoders
//!
//! An [`Encoder`] knows one import format's fixed schema: the header, the
//! separator placed between two records, the record itself and the footer.
//! Lifecycle and punctuation decisions belong to
//! [`ReportSession`](crate::session::ReportSession); encoders only map a
//! violation onto fields and write them.

pub mod coverity;
pub mod polaris;

use std::io::{self, Write};

use crate::config::ReportConfig;
use crate::format::ReportFormat;
use crate::violation::Violation;

pub use coverity::CoverityEncoder;
pub use polaris::PolarisEncoder;

/// One violation ready for encoding
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub violation: &'a Violation,

    /// Violation filename after prefix stripping
    pub path: &'a str,
}

/// Trait for format-specific serializers
pub trait Encoder {
    /// The format this encoder produces
    fn format(&self) -> ReportFormat;

    /// Write the fixed document header. Version and name are not escaped.
    fn write_header(&self, out: &mut dyn Write, config: &ReportConfig) -> io::Result<()>;

    /// Text written before every record except the first
    fn separator(&self) -> &'static str;

    /// Write a single record, without any leading or trailing separator
    fn write_record(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()>;

    /// Close the record list and write any trailing sections.
    ///
    /// `files` holds each contributing source file once, in first-seen order.
    fn write_footer(&self, out: &mut dyn Write, files: &[String]) -> io::Result<()>;
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn format(&self) -> ReportFormat {
        (**self).format()
    }

    fn write_header(&self, out: &mut dyn Write, config: &ReportConfig) -> io::Result<()> {
        (**self).write_header(out, config)
    }

    fn separator(&self) -> &'static str {
        (**self).separator()
    }

    fn write_record(&self, out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
        (**self).write_record(out, record)
    }

    fn write_footer(&self, out: &mut dyn Write, files: &[String]) -> io::Result<()> {
        (**self).write_footer(out, files)
    }
}

/// Checker name shared by both formats ("PMD.<rule>")
pub(crate) fn checker_name(rule_name: &str) -> String {
    format!("PMD.{}", rule_name)
}

pub(crate) const LINK_TEXT: &str = "PMD Doc";
