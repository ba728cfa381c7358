use crate::error::GuideError;
use crate::models::Coordinate;
use crate::services::{MapsClient, MapsError};

/// Resolve an optional location name to a coordinate
///
/// No name means the configured default coordinate; no geocoding call is made.
pub async fn resolve_coordinates(
    maps: &MapsClient,
    location_name: Option<&str>,
    default: Coordinate,
) -> Result<Coordinate, GuideError> {
    let Some(name) = location_name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(default);
    };

    match maps.geocode(name).await {
        Ok(Some(coordinate)) => {
            tracing::debug!("{} の座標: {}", name, coordinate);
            Ok(coordinate)
        }
        Ok(None) => {
            tracing::warn!("Location not found: {}", name);
            Err(GuideError::NotFound(format!("{} の座標が見つかりません", name)))
        }
        Err(MapsError::HttpStatus(status)) => {
            tracing::error!("Geocoding failed for {}: status {}", name, status);
            Err(GuideError::Service(format!(
                "Google Maps APIから座標を取得できませんでした。ステータスコード: {}",
                status
            )))
        }
        Err(e) => {
            tracing::error!("Geocoding failed for {}: {}", name, e);
            Err(e.into())
        }
    }
}
