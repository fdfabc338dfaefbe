//! List the registered report formats

use anyhow::Result;
use colored::Colorize;
use trackport_core::ReportFormat;

pub fn run() -> Result<()> {
    for format in ReportFormat::ALL {
        println!(
            "  {:<10} {:<6} {}",
            format.name().bold(),
            format!(".{}", format.default_extension()).dimmed(),
            format.description()
        );
    }
    Ok(())
}
