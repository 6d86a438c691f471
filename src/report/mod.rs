pub mod json;
pub mod md;

use crate::error::HealthError;
use crate::summary::EngagementSummary;
use crate::types::health::HealthReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(reports: &[HealthReport], format: OutputFormat) -> Result<String, HealthError> {
    match format {
        OutputFormat::Json => json::reports_to_json(reports).map_err(HealthError::Json),
        OutputFormat::Md => Ok(reports
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
    }
}

pub fn render_summary(
    summaries: &[EngagementSummary],
    format: OutputFormat,
) -> Result<String, HealthError> {
    match format {
        OutputFormat::Json => json::summaries_to_json(summaries).map_err(HealthError::Json),
        OutputFormat::Md => Ok(summaries
            .iter()
            .map(md::summary_to_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
    }
}
