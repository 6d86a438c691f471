use serde::Serialize;

/// Calendar date with independently optional parts, as the profile API reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl CalendarDate {
    pub fn is_set(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Renders `day/month/year`, with unset parts shown as `?`.
    pub fn display(&self) -> String {
        fn part<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
        }
        format!("{}/{}/{}", part(self.day), part(self.month), part(self.year))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialHourPeriod {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialHours {
    pub periods: Vec<SpecialHourPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationProfile {
    pub name: Option<String>,
    pub title: String,
    pub opening_date: Option<CalendarDate>,
    pub phone_numbers: Vec<String>,
    pub website_uri: Option<String>,
    pub description: Option<String>,
    pub special_hours: Option<SpecialHours>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StarRating {
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unspecified,
    #[serde(rename = "ONE")]
    One,
    #[serde(rename = "TWO")]
    Two,
    #[serde(rename = "THREE")]
    Three,
    #[serde(rename = "FOUR")]
    Four,
    #[serde(rename = "FIVE")]
    Five,
}

impl StarRating {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "ONE" => Self::One,
            "TWO" => Self::Two,
            "THREE" => Self::Three,
            "FOUR" => Self::Four,
            "FIVE" => Self::Five,
            _ => Self::Unspecified,
        }
    }

    pub fn from_number(stars: i64) -> Self {
        match stars {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            _ => Self::Unspecified,
        }
    }

    /// Numeric value used for averaging; unknown ratings count as 0.
    pub fn stars(self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewReply {
    pub comment: String,
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    pub reviewer: String,
    pub star_rating: StarRating,
    pub comment: String,
    pub create_time: Option<String>,
    pub reply: Option<ReviewReply>,
}

impl Review {
    pub fn is_answered(&self) -> bool {
        self.reply.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub topic_type: Option<String>,
    pub state: Option<String>,
    pub create_time: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaFormat {
    Photo,
    Video,
    #[default]
    Other,
}

impl MediaFormat {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "PHOTO" => Self::Photo,
            "VIDEO" => Self::Video,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaItem {
    pub format: MediaFormat,
    pub create_time: Option<String>,
}

/// Only counted; the question text is never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub name: Option<String>,
}

/// One day of a daily performance metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatedValue {
    pub date: Option<CalendarDate>,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSeries {
    /// API metric name, e.g. `WEBSITE_CLICKS`.
    pub metric: String,
    pub values: Vec<DatedValue>,
}

/// Monthly search impressions for one keyword. Low volumes only carry a threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchKeyword {
    pub keyword: String,
    pub value: Option<u64>,
    pub threshold: Option<u64>,
}

/// Everything fetched for one location, already resolved to concrete optional values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub location: LocationProfile,
    pub reviews: Vec<Review>,
    pub posts: Vec<Post>,
    pub media: Vec<MediaItem>,
    pub questions: Vec<Question>,
    pub metrics: Vec<MetricSeries>,
    pub search_keywords: Vec<SearchKeyword>,
}
