//! lint-triage CLI tool.
//!
//! Usage:
//! ```bash
//! lint-triage [OPTIONS] <lint_report_file>
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod classify;
mod output;

/// Usage line printed when no report is given.
const USAGE: &str = "Usage: lint-triage <lint_report_file>";

/// Group files from linter output by unescaped entities, unused variables and explicit any
#[derive(Parser)]
#[command(name = "lint-triage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file containing linter output
    report: Option<PathBuf>,

    /// Output format
    #[arg(short, long, env = "LINT_TRIAGE_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Anything after the report is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

/// Output format for the grouped files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Three sections of sorted paths.
    #[default]
    Text,
    /// JSON object keyed by category.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(report) = cli.report else {
        println!("{USAGE}");
        return Ok(());
    };

    classify::run(&report, cli.format)
}
