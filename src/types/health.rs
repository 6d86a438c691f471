use crate::i18n::Locale;
use serde::Serialize;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    Weak,
    Reasonable,
    Good,
}

/// Stable identifiers of the health battery checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    FoundationDate,
    UnansweredReviews,
    VideoCount,
    LastMedia,
    LastPost,
    ReviewTrend,
    SpecialHours,
    Questions,
    BusinessName,
    PhoneNumber,
    Website,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub score: Score,
    pub value: Option<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub weak: usize,
    pub reasonable: usize,
    pub good: usize,
}

impl StatusCounts {
    pub fn tally(checks: &[CheckResult]) -> Self {
        checks.iter().fold(Self::default(), |mut counts, check| {
            match check.status {
                Status::Weak => counts.weak += 1,
                Status::Reasonable => counts.reasonable += 1,
                Status::Good => counts.good += 1,
            }
            counts
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub location: String,
    pub snapshot: Option<String>,
    pub snapshot_sha256: Option<String>,
    pub generated_at: String,
    pub locale: Locale,
    pub overall_score: Score,
    pub counts: StatusCounts,
    pub checks: Vec<CheckResult>,
}

impl HealthReport {
    pub fn new(location: &str, generated_at: String, locale: Locale, checks: Vec<CheckResult>) -> Self {
        Self {
            location: location.to_string(),
            snapshot: None,
            snapshot_sha256: None,
            generated_at,
            locale,
            overall_score: overall_score(&checks),
            counts: StatusCounts::tally(&checks),
            checks,
        }
    }

    pub fn with_source(mut self, path: String, sha256: String) -> Self {
        self.snapshot = Some(path);
        self.snapshot_sha256 = Some(sha256);
        self
    }

    pub fn has_weak(&self) -> bool {
        self.counts.weak > 0
    }
}

/// Rounded mean of the check scores; 0 for an empty battery.
pub fn overall_score(checks: &[CheckResult]) -> Score {
    if checks.is_empty() {
        return 0;
    }
    let total: u32 = checks.iter().map(|check| u32::from(check.score)).sum();
    let count = checks.len() as u32;
    ((total + count / 2) / count) as Score
}
