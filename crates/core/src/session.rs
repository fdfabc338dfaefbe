//! Report session — the begin → emit* → finish lifecycle of one report run
//!
//! A session owns the state carried across calls: how many records were
//! written (to place separators) and which files contributed (for the
//! footer). Records go straight to the writer and are never buffered.

use std::collections::HashSet;
use std::io::Write;

use crate::config::ReportConfig;
use crate::encoder::{Encoder, Record};
use crate::error::{ReportError, Result};
use crate::path;
use crate::violation::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Open,
    Finished,
}

/// Counts reported by [`ReportSession::finish`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Records written
    pub records: usize,
    /// Distinct files that contributed at least one record
    pub files: usize,
}

/// Stateful renderer for a single report
pub struct ReportSession<E: Encoder, W: Write> {
    encoder: E,
    writer: W,
    config: ReportConfig,
    phase: Phase,
    emitted_count: usize,
    seen: HashSet<String>,
    seen_order: Vec<String>,
}

impl<E: Encoder, W: Write> ReportSession<E, W> {
    pub fn new(encoder: E, writer: W) -> Self {
        Self {
            encoder,
            writer,
            config: ReportConfig::default(),
            phase: Phase::Created,
            emitted_count: 0,
            seen: HashSet::new(),
            seen_order: Vec::new(),
        }
    }

    /// Start the report and write the format header.
    pub fn begin(&mut self, config: ReportConfig) -> Result<()> {
        match self.phase {
            Phase::Created => {}
            Phase::Open => return Err(ReportError::AlreadyStarted),
            Phase::Finished => return Err(ReportError::AlreadyFinished),
        }

        self.config = config;
        self.emitted_count = 0;
        self.seen.clear();
        self.seen_order.clear();

        tracing::debug!(
            format = %self.encoder.format(),
            version = %self.config.format_version,
            name = %self.config.format_name,
            "beginning report"
        );
        self.encoder.write_header(&mut self.writer, &self.config)?;
        self.phase = Phase::Open;
        Ok(())
    }

    /// Append one violation to the report.
    ///
    /// Returns `Ok(false)` for an absent violation, which writes nothing and
    /// registers no file.
    pub fn emit(&mut self, violation: Option<&Violation>) -> Result<bool> {
        self.ensure_open()?;

        let Some(violation) = violation else {
            tracing::debug!("skipping absent violation");
            return Ok(false);
        };

        let path = path::normalize(&violation.filename, &self.config.strip_path_prefix);

        if self.emitted_count > 0 {
            self.writer
                .write_all(self.encoder.separator().as_bytes())?;
        }
        self.encoder
            .write_record(&mut self.writer, &Record { violation, path })?;
        self.emitted_count += 1;

        tracing::trace!(
            rule = %violation.rule_name,
            file = %path,
            line = violation.begin_line,
            "emitted record"
        );

        if !self.seen.contains(&violation.filename) {
            self.seen.insert(violation.filename.clone());
            self.seen_order.push(violation.filename.clone());
        }

        Ok(true)
    }

    /// Emit a batch of violations in order, returning how many were written.
    pub fn emit_all<'v, I>(&mut self, violations: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'v Violation>,
    {
        let mut rendered = 0;
        for violation in violations {
            if self.emit(Some(violation))? {
                rendered += 1;
            }
        }
        Ok(rendered)
    }

    /// Close the record list, write the footer and flush the writer.
    ///
    /// The session counts as finished even if the footer fails to write.
    pub fn finish(&mut self) -> Result<RenderSummary> {
        self.ensure_open()?;
        self.phase = Phase::Finished;

        self.encoder.write_footer(&mut self.writer, &self.seen_order)?;
        self.writer.flush()?;

        let summary = RenderSummary {
            records: self.emitted_count,
            files: self.seen_order.len(),
        };
        tracing::debug!(
            records = summary.records,
            files = summary.files,
            "finished report"
        );
        Ok(summary)
    }

    /// Records written so far
    pub fn emitted_count(&self) -> usize {
        self.emitted_count
    }

    /// Distinct contributing filenames, in first-seen order
    pub fn seen_files(&self) -> &[String] {
        &self.seen_order
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Give back the writer; the caller owns closing it.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_open(&self) -> Result<()> {
        match self.phase {
            Phase::Open => Ok(()),
            Phase::Created => Err(ReportError::NotStarted),
            Phase::Finished => Err(ReportError::AlreadyFinished),
        }
    }
}
