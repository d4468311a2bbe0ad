use labref_core::LoadSummary;

use crate::cli::OutputFormat;

/// Render the load summary in the requested format.
pub fn render(summary: &LoadSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Print the load summary on stdout.
pub fn output(summary: &LoadSummary, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(summary, format)?;
    println!("{rendered}");
    Ok(())
}
