use crate::i18n::Locale;
use crate::types::profile::{MediaFormat, ProfileSnapshot, SearchKeyword, StarRating};
use serde::Serialize;
use std::collections::BTreeMap;

const UNKNOWN: &str = "UNKNOWN";

pub const TOP_KEYWORDS: usize = 10;

/// Where a profile view happened, one per impressions metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    MobileSearch,
    MobileMaps,
    DesktopSearch,
    DesktopMaps,
}

const VIEW_METRICS: [(Surface, &str); 4] = [
    (Surface::MobileSearch, "BUSINESS_IMPRESSIONS_MOBILE_SEARCH"),
    (Surface::MobileMaps, "BUSINESS_IMPRESSIONS_MOBILE_MAPS"),
    (Surface::DesktopSearch, "BUSINESS_IMPRESSIONS_DESKTOP_SEARCH"),
    (Surface::DesktopMaps, "BUSINESS_IMPRESSIONS_DESKTOP_MAPS"),
];

const WEBSITE_CLICKS: &str = "WEBSITE_CLICKS";
const CALL_CLICKS: &str = "CALL_CLICKS";
const DIRECTION_REQUESTS: &str = "BUSINESS_DIRECTION_REQUESTS";
const CONVERSATIONS: &str = "BUSINESS_CONVERSATIONS";
const BOOKINGS: &str = "BUSINESS_BOOKINGS";

const DISTRIBUTION_ORDER: [StarRating; 6] = [
    StarRating::Five,
    StarRating::Four,
    StarRating::Three,
    StarRating::Two,
    StarRating::One,
    StarRating::Unspecified,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingCount {
    pub rating: StarRating,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// Percentage of answered reviews; absent without reviews.
    pub response_rate: Option<f64>,
    /// Mean over reviews with a known rating.
    pub average_rating: Option<f64>,
    pub distribution: Vec<RatingCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostBreakdown {
    pub topic_type: String,
    pub state: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaStats {
    pub photos: usize,
    pub videos: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionCounts {
    pub website_clicks: u64,
    pub calls: u64,
    pub directions: u64,
    pub messages: u64,
    pub bookings: u64,
}

impl InteractionCounts {
    pub fn total(&self) -> u64 {
        self.website_clicks + self.calls + self.directions + self.messages + self.bookings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceViews {
    pub surface: Surface,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceStats {
    pub total_views: u64,
    pub total_interactions: u64,
    pub interactions: InteractionCounts,
    /// Surfaces with at least one view; mobile before desktop, search before maps.
    pub surfaces: Vec<SurfaceViews>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
    /// `count` is the API's lower-bound threshold, not an exact value.
    pub approximate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSummary {
    pub location: String,
    pub locale: Locale,
    pub reviews: ReviewStats,
    pub posts: Vec<PostBreakdown>,
    pub media: MediaStats,
    pub questions: usize,
    /// Absent when the snapshot carries no daily metrics.
    pub performance: Option<PerformanceStats>,
    pub top_keywords: Vec<KeywordCount>,
}

pub fn summarize(snapshot: &ProfileSnapshot, locale: Locale) -> EngagementSummary {
    EngagementSummary {
        location: snapshot.location.title.clone(),
        locale,
        reviews: review_stats(snapshot),
        posts: post_breakdown(snapshot),
        media: media_stats(snapshot),
        questions: snapshot.questions.len(),
        performance: performance_stats(snapshot),
        top_keywords: top_keywords(&snapshot.search_keywords),
    }
}

fn review_stats(snapshot: &ProfileSnapshot) -> ReviewStats {
    let reviews = &snapshot.reviews;
    let total = reviews.len();
    let answered = reviews.iter().filter(|review| review.is_answered()).count();

    let rated = reviews
        .iter()
        .map(|review| review.star_rating)
        .filter(|rating| *rating != StarRating::Unspecified)
        .collect::<Vec<_>>();
    let average_rating = (!rated.is_empty()).then(|| {
        rated.iter().map(|rating| f64::from(rating.stars())).sum::<f64>() / rated.len() as f64
    });

    let distribution = DISTRIBUTION_ORDER
        .iter()
        .map(|rating| RatingCount {
            rating: *rating,
            count: reviews
                .iter()
                .filter(|review| review.star_rating == *rating)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();

    ReviewStats {
        total,
        answered,
        unanswered: total - answered,
        response_rate: (total > 0).then(|| answered as f64 / total as f64 * 100.0),
        average_rating,
        distribution,
    }
}

fn post_breakdown(snapshot: &ProfileSnapshot) -> Vec<PostBreakdown> {
    let mut groups = BTreeMap::<(String, String), usize>::new();
    for post in &snapshot.posts {
        let key = (
            post.topic_type.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            post.state.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        );
        *groups.entry(key).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((topic_type, state), count)| PostBreakdown {
            topic_type,
            state,
            count,
        })
        .collect()
}

fn media_stats(snapshot: &ProfileSnapshot) -> MediaStats {
    snapshot
        .media
        .iter()
        .fold(MediaStats::default(), |mut stats, item| {
            match item.format {
                MediaFormat::Photo => stats.photos += 1,
                MediaFormat::Video => stats.videos += 1,
                MediaFormat::Other => stats.other += 1,
            }
            stats
        })
}

/// Sum of one daily metric. A later value for the same day replaces an
/// earlier one; values without a date are ignored.
fn metric_total(snapshot: &ProfileSnapshot, metric: &str) -> u64 {
    let mut by_day = BTreeMap::new();
    for dated in snapshot
        .metrics
        .iter()
        .filter(|series| series.metric == metric)
        .flat_map(|series| &series.values)
    {
        if let Some(date) = dated.date {
            by_day.insert((date.year, date.month, date.day), dated.value);
        }
    }
    by_day.values().sum()
}

fn performance_stats(snapshot: &ProfileSnapshot) -> Option<PerformanceStats> {
    if snapshot.metrics.is_empty() {
        return None;
    }

    let views = VIEW_METRICS
        .iter()
        .map(|(surface, metric)| SurfaceViews {
            surface: *surface,
            views: metric_total(snapshot, metric),
        })
        .collect::<Vec<_>>();
    let interactions = InteractionCounts {
        website_clicks: metric_total(snapshot, WEBSITE_CLICKS),
        calls: metric_total(snapshot, CALL_CLICKS),
        directions: metric_total(snapshot, DIRECTION_REQUESTS),
        messages: metric_total(snapshot, CONVERSATIONS),
        bookings: metric_total(snapshot, BOOKINGS),
    };

    Some(PerformanceStats {
        total_views: views.iter().map(|surface| surface.views).sum(),
        total_interactions: interactions.total(),
        interactions,
        surfaces: views.into_iter().filter(|surface| surface.views > 0).collect(),
    })
}

/// Highest counts first; a threshold stands in when the exact value is withheld.
fn top_keywords(keywords: &[SearchKeyword]) -> Vec<KeywordCount> {
    let mut counted = keywords
        .iter()
        .filter(|keyword| !keyword.keyword.trim().is_empty())
        .filter_map(|keyword| match (keyword.value, keyword.threshold) {
            (Some(count), _) => Some(KeywordCount {
                keyword: keyword.keyword.clone(),
                count,
                approximate: false,
            }),
            (None, Some(threshold)) => Some(KeywordCount {
                keyword: keyword.keyword.clone(),
                count: threshold,
                approximate: true,
            }),
            (None, None) => None,
        })
        .collect::<Vec<_>>();
    counted.sort_by(|left, right| right.count.cmp(&left.count));
    counted.truncate(TOP_KEYWORDS);
    counted
}
