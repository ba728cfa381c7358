use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::GuideError;
use crate::models::PlaceQuery;

/// Query-string parameters shared by `/chat` and `/results`
///
/// Everything arrives as text so that an empty form field and a malformed
/// value can both be reported as a validation error instead of an extractor
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PlaceSearchParams {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "queryは1〜200文字で指定してください"))]
    pub query: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "location_nameは100文字以内で指定してください"))]
    pub location_name: Option<String>,
    #[serde(default)]
    pub open_now: Option<String>,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl TryFrom<PlaceSearchParams> for PlaceQuery {
    type Error = GuideError;

    fn try_from(params: PlaceSearchParams) -> Result<Self, Self::Error> {
        let params = PlaceSearchParams {
            query: params.query.trim().to_string(),
            location_name: non_blank(params.location_name),
            ..params
        };

        params
            .validate()
            .map_err(|errors| GuideError::Validation(errors.to_string()))?;

        Ok(PlaceQuery {
            open_now: parse_open_now(params.open_now.as_deref())?,
            price_level: parse_price_level(params.price_level.as_deref())?,
            min_rating: parse_min_rating(params.rating.as_deref())?,
            query: params.query,
            location_name: params.location_name,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Boolean-like flag; blank means "not given"
pub fn parse_open_now(raw: Option<&str>) -> Result<Option<bool>, GuideError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(GuideError::Validation(format!(
            "open_nowの値が不正です: {}",
            raw
        ))),
    }
}

/// Integer price band, 1 to 4
pub fn parse_price_level(raw: Option<&str>) -> Result<Option<u8>, GuideError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<u8>() {
        Ok(level) if (1..=4).contains(&level) => Ok(Some(level)),
        _ => Err(GuideError::Validation(format!(
            "price_levelは1〜4の整数で指定してください: {}",
            raw
        ))),
    }
}

/// Minimum rating, 0.0 to 5.0
pub fn parse_min_rating(raw: Option<&str>) -> Result<Option<f64>, GuideError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(rating) if (0.0..=5.0).contains(&rating) => Ok(Some(rating)),
        _ => Err(GuideError::Validation(format!(
            "ratingは0.0〜5.0の数値で指定してください: {}",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> PlaceSearchParams {
        PlaceSearchParams {
            query: query.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_query() {
        let query = PlaceQuery::try_from(params("カフェ")).unwrap();
        assert_eq!(query, PlaceQuery::new("カフェ"));
    }

    #[test]
    fn test_full_query() {
        let query = PlaceQuery::try_from(PlaceSearchParams {
            query: " カフェ ".to_string(),
            location_name: Some("新宿区".to_string()),
            open_now: Some("true".to_string()),
            price_level: Some("2".to_string()),
            rating: Some("4.0".to_string()),
        })
        .unwrap();

        assert_eq!(query.query, "カフェ");
        assert_eq!(query.location_name.as_deref(), Some("新宿区"));
        assert_eq!(query.open_now, Some(true));
        assert_eq!(query.price_level, Some(2));
        assert_eq!(query.min_rating, Some(4.0));
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let query = PlaceQuery::try_from(PlaceSearchParams {
            query: "公園".to_string(),
            location_name: Some("  ".to_string()),
            open_now: Some("".to_string()),
            price_level: Some(" ".to_string()),
            rating: Some("".to_string()),
        })
        .unwrap();

        assert_eq!(query, PlaceQuery::new("公園"));
    }

    #[test]
    fn test_blank_query_rejected() {
        let err = PlaceQuery::try_from(params("   ")).unwrap_err();
        assert!(matches!(err, GuideError::Validation(_)));
    }

    #[test]
    fn test_price_level_bounds() {
        assert_eq!(parse_price_level(Some("1")).unwrap(), Some(1));
        assert_eq!(parse_price_level(Some("4")).unwrap(), Some(4));
        assert!(parse_price_level(Some("0")).is_err());
        assert!(parse_price_level(Some("5")).is_err());
        assert!(parse_price_level(Some("cheap")).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(parse_min_rating(Some("0")).unwrap(), Some(0.0));
        assert_eq!(parse_min_rating(Some("5.0")).unwrap(), Some(5.0));
        assert!(parse_min_rating(Some("5.5")).is_err());
        assert!(parse_min_rating(Some("-1")).is_err());
        assert!(parse_min_rating(Some("NaN")).is_err());
    }

    #[test]
    fn test_open_now_flags() {
        assert_eq!(parse_open_now(Some("TRUE")).unwrap(), Some(true));
        assert_eq!(parse_open_now(Some("on")).unwrap(), Some(true));
        assert_eq!(parse_open_now(Some("0")).unwrap(), Some(false));
        assert_eq!(parse_open_now(None).unwrap(), None);
        assert!(parse_open_now(Some("maybe")).is_err());
    }
}
