use super::{dates, CheckContext};
use crate::i18n::{Advice, Reading};
use crate::types::health::{CheckId, CheckResult, Score, Status};
use crate::types::profile::MediaFormat;

pub const RECOMMENDED_VIDEOS: usize = 3;

const MEDIA_GOOD_DAYS: i64 = 30;
const MEDIA_MAX_DAYS: i64 = 60;
const POST_GOOD_DAYS: i64 = 7;
const POST_MAX_DAYS: i64 = 30;

/// Both bounds are inclusive.
fn recency_grade(days: i64, good_days: i64, max_days: i64) -> (Status, Score) {
    if days <= good_days {
        (Status::Good, 100)
    } else if days <= max_days {
        (Status::Reasonable, 50)
    } else {
        (Status::Weak, 0)
    }
}

pub fn video_count(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let videos = ctx
        .snapshot
        .media
        .iter()
        .filter(|item| item.format == MediaFormat::Video)
        .count();

    let result = if videos >= RECOMMENDED_VIDEOS {
        ctx.result(
            CheckId::VideoCount,
            Status::Good,
            100,
            Some(Reading::Count(videos)),
            Advice::None,
        )
    } else if videos > 0 {
        ctx.result(
            CheckId::VideoCount,
            Status::Reasonable,
            50,
            Some(Reading::Count(videos)),
            Advice::None,
        )
    } else {
        ctx.result(
            CheckId::VideoCount,
            Status::Weak,
            0,
            None,
            Advice::NoVideos {
                recommended: RECOMMENDED_VIDEOS,
            },
        )
    };
    Some(result)
}

pub fn last_media(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let newest = ctx.snapshot.media.iter().min_by(|left, right| {
        dates::newest_first(left.create_time.as_deref(), right.create_time.as_deref())
    });
    let Some(newest) = newest else {
        return Some(ctx.result(
            CheckId::LastMedia,
            Status::Weak,
            0,
            None,
            Advice::NoMedia,
        ));
    };

    let Some(days) = dates::days_since(newest.create_time.as_deref(), ctx.options.now) else {
        return ctx.unavailable(CheckId::LastMedia);
    };

    let (status, score) = recency_grade(days, MEDIA_GOOD_DAYS, MEDIA_MAX_DAYS);
    Some(ctx.result(
        CheckId::LastMedia,
        status,
        score,
        Some(Reading::Days(days)),
        Advice::MediaAge {
            days,
            max_days: MEDIA_MAX_DAYS,
        },
    ))
}

pub fn last_post(ctx: &CheckContext<'_>) -> Option<CheckResult> {
    let posts = &ctx.snapshot.posts;
    if posts.is_empty() {
        return Some(ctx.result(
            CheckId::LastPost,
            Status::Weak,
            0,
            None,
            Advice::NoPosts,
        ));
    }

    let newest = posts
        .iter()
        .filter(|post| post.create_time.is_some())
        .min_by(|left, right| {
            dates::newest_first(left.create_time.as_deref(), right.create_time.as_deref())
        });
    let Some(newest) = newest else {
        return Some(ctx.result(
            CheckId::LastPost,
            Status::Weak,
            0,
            None,
            Advice::NoValidPosts,
        ));
    };

    let Some(days) = dates::days_since(newest.create_time.as_deref(), ctx.options.now) else {
        return ctx.unavailable(CheckId::LastPost);
    };

    let (status, score) = recency_grade(days, POST_GOOD_DAYS, POST_MAX_DAYS);
    Some(ctx.result(
        CheckId::LastPost,
        status,
        score,
        Some(Reading::Days(days)),
        Advice::PostAge {
            days,
            max_days: POST_MAX_DAYS,
        },
    ))
}
