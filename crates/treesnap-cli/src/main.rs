//! treesnap CLI
//!
//! With no arguments: snapshot the executable's directory into
//! `CompareVersions.txt` on first run, compare against it on later runs.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use treesnap_core::errors::ExError;
use treesnap_core::logging_facility::{init, Profile};
use treesnap_engine::{run, RunConfig};

mod output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable comparison report
    Text,
    /// Reconciliation result as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "treesnap")]
#[command(about = "Snapshot a directory tree and report what changed since", long_about = None)]
struct Cli {
    /// Directory to scan (defaults to the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Report file name inside the root
    #[arg(long, default_value = treesnap_core::DEFAULT_REPORT_FILE_NAME)]
    report_name: String,

    /// File name to skip (defaults to the executable's own name)
    #[arg(long)]
    exclude: Option<String>,

    /// Comparison output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Diagnostic log format on stderr; RUST_LOG sets the filter
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn build_config(cli: &Cli) -> Result<RunConfig, ExError> {
    let mut config = RunConfig::for_executable()?.with_report_file_name(&cli.report_name);
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(exclude) = &cli.exclude {
        config.exclude_filename = Some(exclude.clone());
    }
    Ok(config)
}

fn execute(cli: &Cli) -> Result<String, ExError> {
    let config = build_config(cli)?;
    let outcome = run(&config)?;
    output::render(&config, &outcome, cli.format)
}

fn main() {
    let cli = Cli::parse();
    if let Some(log_format) = cli.log_format {
        init(log_format.profile());
    }

    match execute(&cli) {
        Ok(text) => print!("{}", text),
        Err(e) => println!("An error occurred: {}", e),
    }

    println!("Process completed.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["treesnap"]).unwrap();
        assert_eq!(cli.root, None);
        assert_eq!(cli.report_name, "CompareVersions.txt");
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_format, None);

        let config = build_config(&cli).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(config.root, exe.parent().unwrap());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "treesnap",
            "--root",
            "/data",
            "--report-name",
            "baseline.txt",
            "--exclude",
            "tool.exe",
            "--format",
            "json",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.root, PathBuf::from("/data"));
        assert_eq!(config.report_path(), PathBuf::from("/data/baseline.txt"));
        assert_eq!(config.exclude_filename.as_deref(), Some("tool.exe"));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
