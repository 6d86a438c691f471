//! Profile health battery.
//!
//! Twelve independent checks run in a fixed order against one
//! [`ProfileSnapshot`]. Each check only reads the snapshot and the reference
//! instant in [`ScoringOptions`], so evaluation is pure and repeatable.

pub mod activity;
pub mod dates;
pub mod listing;
pub mod reviews;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::i18n::{self, Advice, Locale, Reading};
use crate::types::config::UnparseableDates;
use crate::types::health::{CheckId, CheckResult, HealthReport, Score, Status};
use crate::types::profile::ProfileSnapshot;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    pub now: DateTime<Utc>,
    pub locale: Locale,
    pub unparseable_dates: UnparseableDates,
}

impl ScoringOptions {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            locale: Locale::default(),
            unparseable_dates: UnparseableDates::default(),
        }
    }
}

pub struct CheckContext<'a> {
    pub snapshot: &'a ProfileSnapshot,
    pub options: &'a ScoringOptions,
}

impl CheckContext<'_> {
    pub fn result(
        &self,
        id: CheckId,
        status: Status,
        score: Score,
        value: Option<Reading>,
        advice: Advice,
    ) -> CheckResult {
        let locale = self.options.locale;
        let text = i18n::check_text(locale, id);
        CheckResult {
            id,
            title: text.title.to_string(),
            description: text.description.to_string(),
            status,
            score,
            value: value.map(|value| i18n::reading(locale, &value)),
            recommendation: i18n::advice(locale, advice),
        }
    }

    /// Outcome of a recency check whose newest timestamp could not be parsed.
    pub fn unavailable(&self, id: CheckId) -> Option<CheckResult> {
        match self.options.unparseable_dates {
            UnparseableDates::Omit => {
                debug!(check = ?id, "creation date unparseable, omitting check");
                None
            }
            UnparseableDates::Flag => Some(self.result(
                id,
                Status::Weak,
                0,
                None,
                Advice::DateUnavailable,
            )),
        }
    }
}

pub type Check = fn(&CheckContext<'_>) -> Option<CheckResult>;

const BATTERY: [(CheckId, Check); 12] = [
    (CheckId::FoundationDate, listing::foundation_date),
    (CheckId::UnansweredReviews, reviews::unanswered_reviews),
    (CheckId::VideoCount, activity::video_count),
    (CheckId::LastMedia, activity::last_media),
    (CheckId::LastPost, activity::last_post),
    (CheckId::ReviewTrend, reviews::review_trend),
    (CheckId::SpecialHours, listing::special_hours),
    (CheckId::Questions, listing::questions),
    (CheckId::BusinessName, listing::business_name),
    (CheckId::PhoneNumber, listing::phone_number),
    (CheckId::Website, listing::website),
    (CheckId::Description, listing::description),
];

/// Check ids in emission order.
#[cfg(test)]
pub(crate) fn battery_ids() -> impl Iterator<Item = CheckId> {
    BATTERY.iter().map(|(id, _)| *id)
}

pub fn evaluate(snapshot: &ProfileSnapshot, options: &ScoringOptions) -> Vec<CheckResult> {
    let context = CheckContext { snapshot, options };
    BATTERY
        .iter()
        .filter_map(|(id, check)| {
            let result = check(&context);
            if let Some(result) = &result {
                debug!(check = ?id, status = ?result.status, score = result.score, "check evaluated");
            }
            result
        })
        .collect()
}

pub fn build_report(snapshot: &ProfileSnapshot, options: &ScoringOptions) -> HealthReport {
    HealthReport::new(
        &snapshot.location.title,
        options.now.to_rfc3339(),
        options.locale,
        evaluate(snapshot, options),
    )
}
