//! Classify command implementation.

use anyhow::{Context, Result};
use lint_triage_core::{classify_file, Category};
use std::path::Path;

use crate::OutputFormat;

/// Reads the report at `path` and prints the grouped files.
pub fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let result = classify_file(path)
        .with_context(|| format!("Failed to classify lint report: {}", path.display()))?;

    for category in Category::ALL {
        tracing::info!("{}: {} file(s)", category, result.len(category));
    }

    super::output::print(&result, format)
}
