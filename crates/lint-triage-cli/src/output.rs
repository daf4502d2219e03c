//! Output formatting for classified reports.

use anyhow::Result;
use lint_triage_core::Classification;

use crate::OutputFormat;

/// Print the classification in the specified format.
pub fn print(result: &Classification, format: OutputFormat) -> Result<()> {
    println!("{}", render(result, format)?.trim_end_matches('\n'));
    Ok(())
}

fn render(result: &Classification, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => result.render_text(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    })
}
