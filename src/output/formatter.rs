use anyhow::Result;

use crate::cli::OutputFormat;

use super::Summary;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(summary: &Summary, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(summary.to_json()?),
            OutputFormat::Markdown => Ok(summary.to_markdown()),
        }
    }
}
