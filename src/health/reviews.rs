use super::CheckContext;
use crate::i18n::{Advice, Reading};
use crate::types::health::{CheckId, CheckResult, Status};

/// Minimum answered share, in percent, for each grade.
const GOOD_RESPONSE_RATE: usize = 90;
const REASONABLE_RESPONSE_RATE: usize = 50;

/// Number of leading (most recent) reviews compared against the full history.
pub const TREND_WINDOW: usize = 5;

pub fn unanswered_reviews(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let reviews = &ctx.snapshot.reviews;
    let total = reviews.len();
    if total == 0 {
        return Some(ctx.result(
            CheckId::UnansweredReviews,
            Status::Reasonable,
            50,
            None,
            Advice::NoReviews,
        ));
    }

    let unanswered = reviews.iter().filter(|review| !review.is_answered()).count();
    // answered / total * 100 >= threshold, kept in integers
    let answered_pct_scaled = (total - unanswered) * 100;
    let (status, score) = if answered_pct_scaled >= GOOD_RESPONSE_RATE * total {
        (Status::Good, 100)
    } else if answered_pct_scaled >= REASONABLE_RESPONSE_RATE * total {
        (Status::Reasonable, 50)
    } else {
        (Status::Weak, 0)
    };

    Some(ctx.result(
        CheckId::UnansweredReviews,
        status,
        score,
        Some(Reading::Unanswered(unanswered)),
        Advice::ReviewReplies { total, unanswered },
    ))
}

pub fn review_trend(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let reviews = &ctx.snapshot.reviews;
    let total = reviews.len();
    if total < TREND_WINDOW {
        return Some(ctx.result(
            CheckId::ReviewTrend,
            Status::Reasonable,
            50,
            None,
            Advice::TrendInsufficient,
        ));
    }

    // Callers pass reviews newest first; the window is taken as given.
    let recent_sum: u64 = reviews
        .iter()
        .take(TREND_WINDOW)
        .map(|review| u64::from(review.star_rating.stars()))
        .sum();
    let overall_sum: u64 = reviews
        .iter()
        .map(|review| u64::from(review.star_rating.stars()))
        .sum();

    // recent_sum / TREND_WINDOW >= overall_sum / total
    let holding = recent_sum * total as u64 >= overall_sum * TREND_WINDOW as u64;
    let (status, score, advice) = if holding {
        (Status::Good, 100, Advice::TrendStable)
    } else {
        (Status::Weak, 0, Advice::TrendDeclining)
    };

    Some(ctx.result(CheckId::ReviewTrend, status, score, None, advice))
}
