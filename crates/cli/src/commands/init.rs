//! Initialize .trackport.toml configuration

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trackport_core::config::CONFIG_FILE_NAME;
use trackport_core::TrackportConfig;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "  {} {} already exists at {:?}",
            "warn".yellow(),
            CONFIG_FILE_NAME,
            config_path
        );
        return Ok(());
    }

    let config = TrackportConfig::default();
    config.save(&config_path)?;

    eprintln!("  {} Created {} at {:?}", "done".green(), CONFIG_FILE_NAME, config_path);
    eprintln!("\nYou can now customize the configuration and run:");
    eprintln!("  trackport render --input violations.jsonl --output report");

    Ok(())
}
