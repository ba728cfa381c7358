use crate::config::SearchSettings;
use crate::core::augment::augment_details;
use crate::error::GuideError;
use crate::models::{Coordinate, PlaceQuery, PlaceRecord};
use crate::services::{MapsClient, NearbySearch};

/// Check a candidate against the minimum rating
///
/// Unrated candidates count as 0.0.
#[inline]
pub fn meets_min_rating(place: &PlaceRecord, min_rating: Option<f64>) -> bool {
    match min_rating {
        Some(min) => place.rating_or_zero() >= min,
        None => true,
    }
}

/// First candidate, in service order, that passes the rating filter
pub fn select_place(candidates: Vec<PlaceRecord>, min_rating: Option<f64>) -> Option<PlaceRecord> {
    candidates
        .into_iter()
        .find(|place| meets_min_rating(place, min_rating))
}

/// Search around `location` and return the selected place with its website attached
///
/// The rating filter only sees the first page the service returns.
pub async fn find_nearby_place(
    maps: &MapsClient,
    query: &PlaceQuery,
    location: Coordinate,
    search: &SearchSettings,
) -> Result<PlaceRecord, GuideError> {
    tracing::debug!("Google Maps API検索開始: クエリ={}, 位置={}", query.query, location);

    let request = NearbySearch {
        keyword: &query.query,
        location,
        radius_m: search.radius_m,
        language: &search.language,
        open_now: query.open_now,
        price_level: query.price_level,
    };

    let candidates = maps.nearby_search(&request).await.map_err(|e| {
        tracing::error!("Nearby search failed: {}", e);
        GuideError::from(e)
    })?;

    let total = candidates.len();
    let place = select_place(candidates, query.min_rating).ok_or_else(|| {
        tracing::warn!(
            "No place matched: keyword={}, candidates={}, min_rating={:?}",
            query.query,
            total,
            query.min_rating
        );
        GuideError::NotFound("該当する場所が見つかりません".to_string())
    })?;

    tracing::debug!("Selected {} ({}) from {} candidates", place.name, place.place_id, total);

    Ok(augment_details(maps, place).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_place(id: &str, rating: Option<f64>) -> PlaceRecord {
        PlaceRecord {
            place_id: id.to_string(),
            name: format!("Place {}", id),
            vicinity: "新宿区".to_string(),
            types: vec!["cafe".to_string()],
            rating,
            user_ratings_total: 10,
            open_now: None,
            price_level: None,
            website: None,
        }
    }

    #[test]
    fn test_no_filter_takes_first() {
        let candidates = vec![create_place("1", Some(2.0)), create_place("2", Some(4.8))];
        assert_eq!(select_place(candidates, None).unwrap().place_id, "1");
    }

    #[test]
    fn test_filter_keeps_service_order() {
        let candidates = vec![
            create_place("1", Some(3.9)),
            create_place("2", Some(4.0)),
            create_place("3", Some(4.9)),
        ];
        let place = select_place(candidates, Some(4.0)).unwrap();
        assert_eq!(place.place_id, "2");
    }

    #[test]
    fn test_unrated_treated_as_zero() {
        let candidates = vec![create_place("1", None), create_place("2", Some(1.0))];
        assert_eq!(select_place(candidates.clone(), Some(0.5)).unwrap().place_id, "2");
        assert_eq!(select_place(candidates, Some(0.0)).unwrap().place_id, "1");
    }

    #[test]
    fn test_all_below_threshold() {
        let candidates = vec![create_place("1", Some(3.0)), create_place("2", None)];
        assert!(select_place(candidates, Some(4.5)).is_none());
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_place(vec![], None).is_none());
    }
}
