//! Trackport CLI library — exposed for integration tests

pub mod commands;
pub mod input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trackport_core::ReportFormat;

#[derive(Parser)]
#[command(name = "trackport")]
#[command(about = "Turn static-analysis violations into defect-tracker import files", long_about = None)]
#[command(version = trackport_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .trackport.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// Render a violation stream into a report
    Render(RenderArgs),

    /// List the available report formats
    Formats,
}

// `--version` here sets the header version; `trackport --version` still
// prints the binary version.
#[derive(clap::Args, Debug, Default)]
#[command(disable_version_flag = true)]
pub struct RenderArgs {
    /// Report format (default: from config, else coverity)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Violations as JSON values, one per line ("-" or omitted: stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout); the format's extension is added when missing
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// File pathname prefix to be stripped
    #[arg(long)]
    pub strip_path: Option<String>,

    /// Format version written into the header
    #[arg(long = "version", visible_alias = "format-version", value_name = "V")]
    pub format_version: Option<String>,

    /// Format name written into the header
    #[arg(long)]
    pub format_name: Option<String>,

    /// Configuration file (default: nearest .trackport.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Coverity,
    Polaris,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Coverity => ReportFormat::Coverity,
            OutputFormat::Polaris => ReportFormat::Polaris,
        }
    }
}

/// Install the stderr tracing subscriber.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "trackport=debug" } else { "trackport=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
