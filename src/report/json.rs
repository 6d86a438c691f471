use crate::summary::EngagementSummary;
use crate::types::health::HealthReport;

/// A single report renders as an object, several as an array.
pub fn reports_to_json(reports: &[HealthReport]) -> Result<String, serde_json::Error> {
    match reports {
        [report] => serde_json::to_string_pretty(report),
        _ => serde_json::to_string_pretty(reports),
    }
}

pub fn summaries_to_json(summaries: &[EngagementSummary]) -> Result<String, serde_json::Error> {
    match summaries {
        [summary] => serde_json::to_string_pretty(summary),
        _ => serde_json::to_string_pretty(summaries),
    }
}
