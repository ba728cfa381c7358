use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Formats as `lat,lng`, the form the nearby-search service expects
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Validated search request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceQuery {
    pub query: String,
    pub location_name: Option<String>,
    pub open_now: Option<bool>,
    /// 1 (inexpensive) to 4 (very expensive)
    pub price_level: Option<u8>,
    /// 0.0 to 5.0, applied client-side
    pub min_rating: Option<f64>,
}

impl PlaceQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// A venue selected from the nearby search, plus its website once augmented
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: u32,
    pub open_now: Option<bool>,
    pub price_level: Option<u8>,
    pub website: Option<String>,
}

impl PlaceRecord {
    /// Missing ratings count as zero when filtering
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn open_status(&self) -> OpenStatus {
        OpenStatus::from(self.open_now)
    }
}

/// Tri-state opening status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

impl OpenStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpenStatus::Open => "営業中",
            OpenStatus::Closed => "営業時間外",
            OpenStatus::Unknown => "営業時間不明",
        }
    }
}

impl From<Option<bool>> for OpenStatus {
    fn from(open_now: Option<bool>) -> Self {
        match open_now {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }
}

/// Generated venue description
///
/// Keeps the completion text as returned (trimmed). The JSON endpoint wants a
/// single line, the HTML page keeps the line structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    raw: String,
}

impl Narrative {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw: text.into().trim().to_string(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Newlines replaced by single spaces
    pub fn collapsed(&self) -> String {
        self.raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of one successful request
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub place: PlaceRecord,
    pub narrative: Narrative,
}
