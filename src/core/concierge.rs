use std::sync::Arc;

use tracing::Instrument;

use crate::config::SearchSettings;
use crate::core::{finder::find_nearby_place, narrative::generate_narrative, resolver::resolve_coordinates};
use crate::error::GuideError;
use crate::models::{Coordinate, PlaceQuery, Recommendation};
use crate::services::{CompletionClient, MapsClient};

/// Recommendation pipeline
///
/// # Stages
/// 1. Resolve the location name (or use the default coordinate)
/// 2. Nearby search + client-side rating filter
/// 3. Website lookup (soft failure)
/// 4. Narrative generation
///
/// Any stage error ends the request; nothing is retried.
#[derive(Clone)]
pub struct Concierge {
    maps: Arc<MapsClient>,
    completion: Arc<CompletionClient>,
    search: SearchSettings,
}

impl Concierge {
    pub fn new(maps: Arc<MapsClient>, completion: Arc<CompletionClient>, search: SearchSettings) -> Self {
        Self {
            maps,
            completion,
            search,
        }
    }

    pub fn default_location(&self) -> Coordinate {
        Coordinate::new(self.search.default_latitude, self.search.default_longitude)
    }

    /// Run the full pipeline for one query
    pub async fn recommend(&self, query: &PlaceQuery) -> Result<Recommendation, GuideError> {
        let span = tracing::info_span!(
            "recommend",
            request_id = %uuid::Uuid::new_v4(),
            query = %query.query
        );

        async {
            let location = resolve_coordinates(
                &self.maps,
                query.location_name.as_deref(),
                self.default_location(),
            )
            .await?;

            let place = find_nearby_place(&self.maps, query, location, &self.search).await?;
            let narrative = generate_narrative(&self.completion, &place).await?;

            tracing::info!(
                "Recommended {} (rating: {:?}, website: {})",
                place.name,
                place.rating,
                place.website.is_some()
            );

            Ok::<_, GuideError>(Recommendation { place, narrative })
        }
        .instrument(span)
        .await
    }
}
