use crate::error::HealthError;
use crate::i18n::Locale;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthConfig {
    pub report: Option<ReportConfig>,
    pub scoring: Option<ScoringConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub locale: Option<String>,
}

/// What the recency checks do when the newest timestamp cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnparseableDates {
    /// Drop the check from the result sequence.
    #[default]
    Omit,
    /// Emit a Weak/0 result stating the date is unavailable.
    Flag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub unparseable_dates: Option<UnparseableDates>,
    pub fail_under: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl HealthConfig {
    pub fn locale(&self) -> Locale {
        self.report
            .as_ref()
            .and_then(|report| report.locale.as_deref())
            .and_then(Locale::from_tag)
            .unwrap_or_default()
    }

    pub fn unparseable_dates(&self) -> UnparseableDates {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.unparseable_dates)
            .unwrap_or_default()
    }

    pub fn fail_under(&self) -> Option<u8> {
        self.scoring.as_ref().and_then(|scoring| scoring.fail_under)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), HealthError> {
        if let Some(tag) = self.report.as_ref().and_then(|report| report.locale.as_deref()) {
            if Locale::from_tag(tag).is_none() {
                return Err(HealthError::ConfigParse(format!(
                    "unsupported report.locale: {tag}"
                )));
            }
        }

        if let Some(fail_under) = self.fail_under() {
            if fail_under > 100 {
                return Err(HealthError::ConfigParse(format!(
                    "scoring.fail_under must be between 0 and 100 (found {fail_under})"
                )));
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(HealthError::ConfigParse(format!(
                    "log.level must be one of {} (found {level})",
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        Ok(())
    }
}
