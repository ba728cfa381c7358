use crate::models::{Coordinate, PlaceRecord};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Google Maps web services
#[derive(Debug, Error)]
pub enum MapsError {
    #[error("Google Maps APIへのリクエストに失敗しました: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Google Maps APIリクエストが失敗しました。ステータスコード: {0}")]
    HttpStatus(u16),

    #[error("Google Maps APIエラー ({status}): {message}")]
    ApiError { status: String, message: String },

    #[error("Google Maps APIの応答を解析できません: {0}")]
    InvalidResponse(String),
}

/// Parameters of a nearby search
#[derive(Debug, Clone)]
pub struct NearbySearch<'a> {
    pub keyword: &'a str,
    pub location: Coordinate,
    pub radius_m: u32,
    pub language: &'a str,
    pub open_now: Option<bool>,
    pub price_level: Option<u8>,
}

/// Google Maps web service client
///
/// Covers the three endpoints the concierge needs:
/// - Geocoding (address -> coordinate)
/// - Nearby Search (keyword + coordinate -> candidates)
/// - Place Details (place id -> website)
pub struct MapsClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<NearbyResult>,
}

/// One candidate as returned by Nearby Search
#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    name: String,
    #[serde(default)]
    vicinity: String,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: u32,
    #[serde(default)]
    opening_hours: Option<OpeningHours>,
    #[serde(default)]
    price_level: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    #[serde(default)]
    open_now: Option<bool>,
}

impl From<NearbyResult> for PlaceRecord {
    fn from(result: NearbyResult) -> Self {
        PlaceRecord {
            place_id: result.place_id,
            name: result.name,
            vicinity: result.vicinity,
            types: result.types,
            rating: result.rating,
            user_ratings_total: result.user_ratings_total,
            open_now: result.opening_hours.and_then(|h| h.open_now),
            price_level: result.price_level,
            website: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    #[serde(default)]
    website: Option<String>,
}

/// Statuses Google reports with HTTP 200 that still mean the call failed
fn check_status(status: Option<&str>, error_message: Option<&str>) -> Result<(), MapsError> {
    match status {
        Some(s @ ("REQUEST_DENIED" | "INVALID_REQUEST" | "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" | "UNKNOWN_ERROR")) => {
            Err(MapsError::ApiError {
                status: s.to_string(),
                message: error_message.unwrap_or("no error message").to_string(),
            })
        }
        _ => Ok(()),
    }
}

impl MapsClient {
    /// Create a new Google Maps client
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, MapsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, MapsError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(MapsError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MapsError::InvalidResponse(e.to_string()))
    }

    /// Geocode an address; `Ok(None)` when the service has no match
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, MapsError> {
        let url = format!(
            "{}?address={}&key={}",
            self.endpoint("geocode/json"),
            urlencoding::encode(address),
            urlencoding::encode(&self.api_key)
        );

        tracing::debug!("Geocoding address: {}", address);

        let json: GeocodeResponse = self.get_json(&url).await?;
        check_status(json.status.as_deref(), json.error_message.as_deref())?;

        Ok(json.results.into_iter().next().map(|r| r.geometry.location))
    }

    /// Run a nearby search and return the first page of candidates in service order
    pub async fn nearby_search(&self, search: &NearbySearch<'_>) -> Result<Vec<PlaceRecord>, MapsError> {
        let mut url = format!(
            "{}?location={}&radius={}&keyword={}&language={}&key={}",
            self.endpoint("place/nearbysearch/json"),
            urlencoding::encode(&search.location.to_string()),
            search.radius_m,
            urlencoding::encode(search.keyword),
            urlencoding::encode(search.language),
            urlencoding::encode(&self.api_key)
        );

        // The service filters on the presence of `opennow`
        if search.open_now == Some(true) {
            url.push_str("&opennow=true");
        }
        // Single price band
        if let Some(level) = search.price_level {
            url.push_str(&format!("&minprice={}&maxprice={}", level, level));
        }

        tracing::debug!(
            "Nearby search: keyword={}, location={}, radius={}",
            search.keyword,
            search.location,
            search.radius_m
        );

        let json: NearbySearchResponse = self.get_json(&url).await?;
        check_status(json.status.as_deref(), json.error_message.as_deref())?;

        Ok(json.results.into_iter().map(PlaceRecord::from).collect())
    }

    /// Look up the website of a place
    pub async fn place_website(&self, place_id: &str) -> Result<Option<String>, MapsError> {
        let url = format!(
            "{}?place_id={}&fields=website&key={}",
            self.endpoint("place/details/json"),
            urlencoding::encode(place_id),
            urlencoding::encode(&self.api_key)
        );

        let json: PlaceDetailsResponse = self.get_json(&url).await?;
        check_status(json.status.as_deref(), json.error_message.as_deref())?;

        Ok(json.result.and_then(|r| r.website))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_client_creation() {
        let client = MapsClient::new(
            "https://maps.test/maps/api/".to_string(),
            "test_key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.endpoint("geocode/json"), "https://maps.test/maps/api/geocode/json");
        assert_eq!(client.api_key, "test_key");
    }

    #[test]
    fn test_nearby_result_conversion() {
        let result: NearbyResult = serde_json::from_value(serde_json::json!({
            "place_id": "abc",
            "name": "喫茶ルノアール",
            "vicinity": "新宿区西新宿1-1",
            "types": ["cafe", "food", "point_of_interest"],
            "rating": 4.1,
            "user_ratings_total": 321,
            "opening_hours": { "open_now": false },
            "price_level": 2
        }))
        .unwrap();

        let place = PlaceRecord::from(result);
        assert_eq!(place.name, "喫茶ルノアール");
        assert_eq!(place.open_now, Some(false));
        assert_eq!(place.price_level, Some(2));
        assert_eq!(place.website, None);
    }

    #[test]
    fn test_sparse_nearby_result() {
        let result: NearbyResult = serde_json::from_value(serde_json::json!({
            "place_id": "xyz",
            "name": "名もなき公園"
        }))
        .unwrap();

        let place = PlaceRecord::from(result);
        assert_eq!(place.rating, None);
        assert_eq!(place.user_ratings_total, 0);
        assert_eq!(place.open_now, None);
        assert!(place.types.is_empty());
    }

    #[test]
    fn test_error_statuses() {
        assert!(check_status(Some("OK"), None).is_ok());
        assert!(check_status(Some("ZERO_RESULTS"), None).is_ok());
        assert!(check_status(None, None).is_ok());

        let err = check_status(Some("REQUEST_DENIED"), Some("The provided API key is invalid.")).unwrap_err();
        assert!(err.to_string().contains("The provided API key is invalid."));
    }
}
