use crate::models::PlaceRecord;
use crate::services::MapsClient;

/// Attach the place's website, if the details lookup yields one
///
/// Never fails: a broken lookup leaves `website` empty.
pub async fn augment_details(maps: &MapsClient, mut place: PlaceRecord) -> PlaceRecord {
    place.website = fetch_website(maps, &place.place_id).await;
    place
}

async fn fetch_website(maps: &MapsClient, place_id: &str) -> Option<String> {
    match maps.place_website(place_id).await {
        Ok(website) => website,
        Err(e) => {
            tracing::warn!("Place details lookup failed for {}: {}", place_id, e);
            None
        }
    }
}
