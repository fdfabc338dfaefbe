//! Registry of the supported import formats

use std::io::Write;
use std::str::FromStr;

use crate::config::ReportConfig;
use crate::encoder::{CoverityEncoder, Encoder, PolarisEncoder};
use crate::error::{ReportError, Result};
use crate::session::{RenderSummary, ReportSession};
use crate::violation::Violation;

/// A defect-tracker import format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// JSON for `cov-import-results`
    Coverity,
    /// XML error list for Polaris
    Polaris,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Coverity, ReportFormat::Polaris];

    pub fn name(&self) -> &'static str {
        match self {
            ReportFormat::Coverity => "coverity",
            ReportFormat::Polaris => "polaris",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportFormat::Coverity => "Coverity format for importing results.",
            ReportFormat::Polaris => "Polaris format for importing results.",
        }
    }

    /// File extension without the leading dot
    pub fn default_extension(&self) -> &'static str {
        match self {
            ReportFormat::Coverity => "json",
            ReportFormat::Polaris => "xml",
        }
    }

    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self {
            ReportFormat::Coverity => Box::new(CoverityEncoder::new()),
            ReportFormat::Polaris => Box::new(PolarisEncoder::new()),
        }
    }

    /// Render a whole report in one call.
    ///
    /// Absent entries are skipped without registering a file.
    pub fn render<W, I>(
        &self,
        writer: W,
        config: ReportConfig,
        violations: I,
    ) -> Result<RenderSummary>
    where
        W: Write,
        I: IntoIterator<Item = Option<Violation>>,
    {
        self.try_render(writer, config, violations.into_iter().map(Ok))
    }

    /// Render a report from a fallible source such as a decoder.
    ///
    /// Stops at the first `Err` item and returns it; the footer is not
    /// written in that case.
    pub fn try_render<W, I, E>(
        &self,
        writer: W,
        config: ReportConfig,
        violations: I,
    ) -> std::result::Result<RenderSummary, E>
    where
        W: Write,
        I: IntoIterator<Item = std::result::Result<Option<Violation>, E>>,
        E: From<ReportError>,
    {
        let mut session = ReportSession::new(self.encoder(), writer);
        session.begin(config)?;
        for violation in violations {
            session.emit(violation?.as_ref())?;
        }
        Ok(session.finish()?)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        ReportFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReportError::UnknownFormat(s.to_string()))
    }
}
