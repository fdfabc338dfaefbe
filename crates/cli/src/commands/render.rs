//! Render command — streams a violation file through a report session

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use trackport_core::{RenderSummary, ReportConfig, ReportFormat, TrackportConfig};

use crate::input::read_violations;
use crate::RenderArgs;

/// File name used when `--output` names a directory
const DEFAULT_STEM: &str = "report";

pub fn run(args: &RenderArgs) -> Result<()> {
    let start = Instant::now();

    // ── 1. Config ────────────────────────────────────────────────
    let config = load_config(args)?;
    let format = resolve_format(args, &config)?;
    let report_config = resolve_report_config(args, &config);
    tracing::debug!(
        format = %format,
        strip_path_prefix = %report_config.strip_path_prefix,
        "resolved report settings"
    );

    // ── 2. Input ─────────────────────────────────────────────────
    let input: Box<dyn Read> = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };
    let input = BufReader::new(input);

    // ── 3. Render ────────────────────────────────────────────────
    match output_path(args.output.as_deref(), format) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let summary = render(format, input, BufWriter::new(file), report_config)?;
            eprintln!(
                "  {} {} report — {} records from {} files → {} ({:.1}s)",
                "done".green(),
                format,
                summary.records,
                summary.files,
                path.display(),
                start.elapsed().as_secs_f64()
            );
        }
        None => {
            let stdout = io::stdout().lock();
            render(format, input, BufWriter::new(stdout), report_config)?;
        }
    }

    Ok(())
}

/// Stream every violation in `input` into a report written to `writer`.
pub fn render<R: Read, W: Write>(
    format: ReportFormat,
    input: R,
    writer: W,
    config: ReportConfig,
) -> Result<RenderSummary> {
    format.try_render(writer, config, read_violations(input))
}

fn load_config(args: &RenderArgs) -> Result<TrackportConfig> {
    match args.config.as_deref() {
        Some(path) => TrackportConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => TrackportConfig::find_and_load(&std::env::current_dir()?),
    }
}

pub fn resolve_format(args: &RenderArgs, config: &TrackportConfig) -> Result<ReportFormat> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    config
        .output
        .format
        .parse::<ReportFormat>()
        .context("invalid [output] format in configuration")
}

/// Command-line flags override the configuration file field by field.
pub fn resolve_report_config(args: &RenderArgs, config: &TrackportConfig) -> ReportConfig {
    let mut report = config.report.clone();
    if let Some(ref prefix) = args.strip_path {
        report.strip_path_prefix = prefix.clone();
    }
    if let Some(ref version) = args.format_version {
        report.format_version = version.clone();
    }
    if let Some(ref name) = args.format_name {
        report.format_name = name.clone();
    }
    report
}

/// Resolve the output file, adding the format's extension when none is given.
///
/// A directory (existing, or written with a trailing separator) gets a
/// `report.<ext>` file inside it.
pub fn output_path(output: Option<&Path>, format: ReportFormat) -> Option<PathBuf> {
    let path = output?;
    if path.as_os_str() == "-" {
        return None;
    }
    let names_dir = path
        .to_string_lossy()
        .ends_with(['/', std::path::MAIN_SEPARATOR]);
    if names_dir || path.is_dir() {
        return Some(path.join(format!("{}.{}", DEFAULT_STEM, format.default_extension())));
    }
    if path.extension().is_some() {
        Some(path.to_path_buf())
    } else {
        Some(path.with_extension(format.default_extension()))
    }
}
