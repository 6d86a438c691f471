use super::{CheckContext, ScoringOptions};
use crate::types::health::CheckResult;
use crate::types::profile::{
    CalendarDate, LocationProfile, MediaFormat, MediaItem, Post, ProfileSnapshot, Question,
    Review, ReviewReply, SpecialHourPeriod, SpecialHours, StarRating,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

pub fn options() -> ScoringOptions {
    ScoringOptions::new(now())
}

pub fn days_ago(days: i64) -> String {
    (now() - chrono::Duration::days(days)).to_rfc3339()
}

pub fn review(rating: StarRating, answered: bool) -> Review {
    Review {
        reviewer: "Customer".to_string(),
        star_rating: rating,
        comment: "ok".to_string(),
        create_time: Some(days_ago(1)),
        reply: answered.then(|| ReviewReply {
            comment: "Thanks!".to_string(),
            update_time: Some(days_ago(0)),
        }),
    }
}

pub fn media(format: MediaFormat, days: i64) -> MediaItem {
    MediaItem {
        format,
        create_time: Some(days_ago(days)),
    }
}

pub fn post(days: i64) -> Post {
    Post {
        topic_type: Some("STANDARD".to_string()),
        state: Some("LIVE".to_string()),
        create_time: Some(days_ago(days)),
    }
}

pub fn run(
    check: fn(&CheckContext<'_>) -> Option<CheckResult>,
    snapshot: &ProfileSnapshot,
) -> Option<CheckResult> {
    let options = options();
    check(&CheckContext {
        snapshot,
        options: &options,
    })
}

/// A snapshot that passes every check.
pub fn healthy_snapshot() -> ProfileSnapshot {
    ProfileSnapshot {
        location: LocationProfile {
            name: Some("locations/123".to_string()),
            title: "Padaria Central".to_string(),
            opening_date: Some(CalendarDate {
                year: Some(1990),
                month: Some(5),
                day: Some(12),
            }),
            phone_numbers: vec!["+55 11 5555-0000".to_string()],
            website_uri: Some("https://padaria.example".to_string()),
            description: Some(
                "Artisanal bread, pastries and coffee baked fresh every morning since 1990."
                    .to_string(),
            ),
            special_hours: Some(SpecialHours {
                periods: vec![SpecialHourPeriod {
                    start_date: Some(CalendarDate {
                        year: Some(2024),
                        month: Some(12),
                        day: Some(25),
                    }),
                    end_date: None,
                    closed: true,
                }],
            }),
        },
        reviews: vec![review(StarRating::Five, true); 6],
        posts: vec![post(3), post(40)],
        media: vec![
            media(MediaFormat::Video, 20),
            media(MediaFormat::Video, 2),
            media(MediaFormat::Photo, 5),
            media(MediaFormat::Video, 10),
        ],
        questions: vec![Question {
            name: Some("locations/123/questions/1".to_string()),
        }],
        ..ProfileSnapshot::default()
    }
}
