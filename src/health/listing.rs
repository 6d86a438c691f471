use super::CheckContext;
use crate::i18n::{Advice, Reading};
use crate::types::health::{CheckId, CheckResult, Status};

pub const MAX_NAME_CHARS: usize = 98;
pub const MIN_DESCRIPTION_CHARS: usize = 50;
pub const RECOMMENDED_QUESTIONS: usize = 1;

pub fn foundation_date(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let result = match ctx.snapshot.location.opening_date {
        Some(date) => ctx.result(
            CheckId::FoundationDate,
            Status::Good,
            100,
            Some(Reading::Date(date.display())),
            Advice::FoundationSet,
        ),
        None => ctx.result(
            CheckId::FoundationDate,
            Status::Weak,
            0,
            None,
            Advice::FoundationMissing,
        ),
    };
    Some(result)
}

pub fn special_hours(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let defined = ctx
        .snapshot
        .location
        .special_hours
        .as_ref()
        .is_some_and(|hours| !hours.periods.is_empty());

    let result = if defined {
        ctx.result(
            CheckId::SpecialHours,
            Status::Good,
            100,
            None,
            Advice::SpecialHoursSet,
        )
    } else {
        ctx.result(
            CheckId::SpecialHours,
            Status::Weak,
            0,
            None,
            Advice::SpecialHoursMissing,
        )
    };
    Some(result)
}

pub fn questions(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let count = ctx.snapshot.questions.len();
    let result = if count >= RECOMMENDED_QUESTIONS {
        ctx.result(
            CheckId::Questions,
            Status::Good,
            100,
            Some(Reading::Count(count)),
            Advice::None,
        )
    } else {
        // Weak is paired with 50 here, not 0.
        ctx.result(
            CheckId::Questions,
            Status::Weak,
            50,
            None,
            Advice::NoQuestions {
                recommended: RECOMMENDED_QUESTIONS,
            },
        )
    };
    Some(result)
}

pub fn business_name(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let length = ctx.snapshot.location.title.chars().count();
    let result = if length <= MAX_NAME_CHARS {
        ctx.result(
            CheckId::BusinessName,
            Status::Good,
            100,
            Some(Reading::Chars(length)),
            Advice::None,
        )
    } else {
        ctx.result(
            CheckId::BusinessName,
            Status::Weak,
            0,
            None,
            Advice::NameTooLong {
                max_chars: MAX_NAME_CHARS,
            },
        )
    };
    Some(result)
}

pub fn phone_number(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let result = if ctx.snapshot.location.phone_numbers.is_empty() {
        ctx.result(
            CheckId::PhoneNumber,
            Status::Weak,
            0,
            None,
            Advice::PhoneMissing,
        )
    } else {
        ctx.result(
            CheckId::PhoneNumber,
            Status::Good,
            100,
            None,
            Advice::PhoneSet,
        )
    };
    Some(result)
}

pub fn website(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let result = if ctx.snapshot.location.website_uri.is_some() {
        ctx.result(CheckId::Website, Status::Good, 100, None, Advice::WebsiteSet)
    } else {
        ctx.result(CheckId::Website, Status::Weak, 0, None, Advice::WebsiteMissing)
    };
    Some(result)
}

pub fn description(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let length = ctx
        .snapshot
        .location
        .description
        .as_deref()
        .unwrap_or_default()
        .chars()
        .count();

    let result = if length >= MIN_DESCRIPTION_CHARS {
        ctx.result(
            CheckId::Description,
            Status::Good,
            100,
            Some(Reading::Chars(length)),
            Advice::None,
        )
    } else {
        ctx.result(
            CheckId::Description,
            Status::Weak,
            0,
            None,
            Advice::DescriptionShort {
                min_chars: MIN_DESCRIPTION_CHARS,
            },
        )
    };
    Some(result)
}
