//! Record shapes as the business-profile API returns them.
//!
//! Everything is optional here; conversion into `types::profile` resolves
//! absence once so the health checks never re-derive defaults. Leaf fields go
//! through [`lenient`], so a wrong-typed value reads as absent.

use super::lenient;
use crate::types::profile::{
    CalendarDate, DatedValue, LocationProfile, MediaFormat, MediaItem, MetricSeries, Post,
    ProfileSnapshot, Question, Review, ReviewReply, SearchKeyword, SpecialHourPeriod,
    SpecialHours, StarRating,
};
use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct RawSnapshot {
    #[serde(default, alias = "locationDetails", deserialize_with = "lenient::record")]
    pub location: Option<RawLocation>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub reviews: Option<Vec<RawReview>>,
    #[serde(default, alias = "localPosts", deserialize_with = "lenient::records")]
    pub posts: Option<Vec<RawPost>>,
    #[serde(default, alias = "mediaItems", deserialize_with = "lenient::records")]
    pub media: Option<Vec<RawMediaItem>>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub questions: Option<Vec<RawQuestion>>,
    #[serde(default, alias = "dailyMetrics", deserialize_with = "lenient::records")]
    pub metrics: Option<Vec<RawMetric>>,
    #[serde(
        default,
        rename = "searchKeywords",
        alias = "searchKeywordsCounts",
        deserialize_with = "lenient::records"
    )]
    pub search_keywords: Option<Vec<RawSearchKeyword>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub phone_numbers: Option<RawPhoneNumbers>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub website_uri: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub profile: Option<RawProfile>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub open_info: Option<RawOpenInfo>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub special_hours: Option<RawSpecialHours>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoneNumbers {
    #[serde(default, deserialize_with = "lenient::string")]
    pub primary_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub additional_phones: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOpenInfo {
    #[serde(default, deserialize_with = "lenient::record")]
    pub opening_date: Option<RawDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDate {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub day: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpecialHours {
    #[serde(default, deserialize_with = "lenient::records")]
    pub special_hour_periods: Option<Vec<RawSpecialHourPeriod>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpecialHourPeriod {
    #[serde(default, deserialize_with = "lenient::record")]
    pub start_date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub end_date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub closed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default, deserialize_with = "lenient::record")]
    pub reviewer: Option<RawReviewer>,
    #[serde(default, deserialize_with = "star_rating")]
    pub star_rating: Option<RawStarRating>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub create_time: Option<String>,
    /// Present whenever the key is, even as `null`.
    #[serde(default, deserialize_with = "lenient::presence")]
    pub review_reply: Option<RawReviewReply>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReviewer {
    #[serde(default, deserialize_with = "lenient::string")]
    pub display_name: Option<String>,
}

/// Older API versions send the rating as an integer, newer ones as a token.
#[derive(Debug)]
pub enum RawStarRating {
    Number(i64),
    Token(String),
}

fn star_rating<'de, D>(deserializer: D) -> Result<Option<RawStarRating>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64().map(RawStarRating::Number),
        Value::String(token) => Some(RawStarRating::Token(token)),
        _ => None,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReviewReply {
    #[serde(default, deserialize_with = "lenient::string")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub update_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(default, deserialize_with = "lenient::string")]
    pub topic_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub create_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMediaItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub media_format: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub create_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

/// One `getDailyMetricsTimeSeries` response, tagged with its metric.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetric {
    #[serde(default, deserialize_with = "lenient::string")]
    pub daily_metric: Option<String>,
    #[serde(default, deserialize_with = "lenient::one_or_many")]
    pub time_series: Option<Vec<RawTimeSeries>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeSeries {
    #[serde(default, deserialize_with = "lenient::records")]
    pub dated_values: Option<Vec<RawDatedValue>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDatedValue {
    #[serde(default, deserialize_with = "lenient::record")]
    pub date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub value: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchKeyword {
    #[serde(default, deserialize_with = "lenient::string")]
    pub search_keyword: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub insights_value: Option<RawInsightsValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawInsightsValue {
    #[serde(default, deserialize_with = "lenient::count")]
    pub value: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub threshold: Option<u64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

// The API uses 0 for an unspecified date component.
fn calendar_date(raw: RawDate) -> Option<CalendarDate> {
    let date = CalendarDate {
        year: raw.year.filter(|year| *year != 0),
        month: raw.month.filter(|month| *month != 0),
        day: raw.day.filter(|day| *day != 0),
    };
    date.is_set().then_some(date)
}

impl From<RawLocation> for LocationProfile {
    fn from(raw: RawLocation) -> Self {
        let phone_numbers = raw
            .phone_numbers
            .map(|phones| {
                phones
                    .primary_phone
                    .into_iter()
                    .chain(phones.additional_phones.unwrap_or_default())
                    .filter(|phone| !phone.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let special_hours = raw
            .special_hours
            .and_then(|hours| hours.special_hour_periods)
            .filter(|periods| !periods.is_empty())
            .map(|periods| SpecialHours {
                periods: periods
                    .into_iter()
                    .map(|period| SpecialHourPeriod {
                        start_date: period.start_date.and_then(calendar_date),
                        end_date: period.end_date.and_then(calendar_date),
                        closed: period.closed.unwrap_or(false),
                    })
                    .collect(),
            });

        LocationProfile {
            name: non_blank(raw.name),
            title: raw.title.unwrap_or_default(),
            opening_date: raw
                .open_info
                .and_then(|info| info.opening_date)
                .and_then(calendar_date),
            phone_numbers,
            website_uri: non_blank(raw.website_uri),
            description: raw.profile.and_then(|profile| profile.description),
            special_hours,
        }
    }
}

impl From<RawStarRating> for StarRating {
    fn from(raw: RawStarRating) -> Self {
        match raw {
            RawStarRating::Number(stars) => StarRating::from_number(stars),
            RawStarRating::Token(token) => StarRating::from_token(&token),
        }
    }
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        Review {
            reviewer: raw
                .reviewer
                .and_then(|reviewer| reviewer.display_name)
                .unwrap_or_default(),
            star_rating: raw.star_rating.map(StarRating::from).unwrap_or_default(),
            comment: raw.comment.unwrap_or_default(),
            create_time: non_blank(raw.create_time),
            reply: raw.review_reply.map(|reply| ReviewReply {
                comment: reply.comment.unwrap_or_default(),
                update_time: non_blank(reply.update_time),
            }),
        }
    }
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        Post {
            topic_type: non_blank(raw.topic_type),
            state: non_blank(raw.state),
            create_time: non_blank(raw.create_time),
        }
    }
}

impl From<RawMediaItem> for MediaItem {
    fn from(raw: RawMediaItem) -> Self {
        MediaItem {
            format: raw
                .media_format
                .as_deref()
                .map(MediaFormat::from_token)
                .unwrap_or_default(),
            create_time: non_blank(raw.create_time),
        }
    }
}

impl From<RawMetric> for MetricSeries {
    fn from(raw: RawMetric) -> Self {
        MetricSeries {
            metric: raw.daily_metric.unwrap_or_default().trim().to_string(),
            values: raw
                .time_series
                .unwrap_or_default()
                .into_iter()
                .flat_map(|series| series.dated_values.unwrap_or_default())
                .map(|dated| DatedValue {
                    date: dated.date.and_then(calendar_date),
                    value: dated.value.unwrap_or(0),
                })
                .collect(),
        }
    }
}

impl From<RawSearchKeyword> for SearchKeyword {
    fn from(raw: RawSearchKeyword) -> Self {
        let insights = raw.insights_value.unwrap_or_default();
        SearchKeyword {
            keyword: raw.search_keyword.unwrap_or_default(),
            value: insights.value,
            threshold: insights.threshold,
        }
    }
}

impl From<RawSnapshot> for ProfileSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        fn convert<R, T: From<R>>(items: Option<Vec<R>>) -> Vec<T> {
            items
                .unwrap_or_default()
                .into_iter()
                .map(T::from)
                .collect()
        }

        ProfileSnapshot {
            location: raw.location.map(LocationProfile::from).unwrap_or_default(),
            reviews: convert(raw.reviews),
            posts: convert(raw.posts),
            media: convert(raw.media),
            questions: raw
                .questions
                .unwrap_or_default()
                .into_iter()
                .map(|question| Question {
                    name: non_blank(question.name),
                })
                .collect(),
            metrics: convert(raw.metrics),
            search_keywords: convert(raw.search_keywords),
        }
    }
}
