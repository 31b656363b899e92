//! One search, from anchor to ranked display results.
//!
//! [`SearchPipeline::execute`] calls the place-search service once and turns
//! its response into a [`ResultSet`]: keep the first [`RESULT_LIMIT`] places
//! in service order, clean titles, label distances, then sort by distance.
//! Places past the limit are dropped before sorting even if they are closer.

use crate::api::PlaceSearch;
use crate::error::{PlacesError, Result};
use crate::format::{format_distance, strip_markup};
use crate::models::{DisplayPlace, PlaceResult, ResultSet, SearchAnchor, RESULT_LIMIT};
use tracing::{info, warn};

pub struct SearchPipeline<S> {
    service: S,
}

impl<S: PlaceSearch> SearchPipeline<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Runs one search from `anchor`.
    ///
    /// `query` goes to the service untouched, empty or not. No retries: any
    /// service failure, whatever its kind, is returned as
    /// [`PlacesError::SearchFailed`] and no results are produced.
    pub async fn execute(&self, anchor: &SearchAnchor, query: &str) -> Result<ResultSet> {
        let coordinate = match *anchor {
            SearchAnchor::Persisted(c) | SearchAnchor::Live(c) => c,
            SearchAnchor::None => return Err(PlacesError::AnchorUnavailable),
        };

        info!(
            "Searching {:?} from {:?} anchor ({}, {})",
            query,
            anchor.source(),
            coordinate.latitude,
            coordinate.longitude
        );
        let places = self.service.search(coordinate, query).await.map_err(|e| {
            warn!("Place search failed: {:?}", e);
            match e {
                PlacesError::SearchFailed(_) => e,
                other => PlacesError::SearchFailed(Box::new(other)),
            }
        })?;

        let received = places.len();
        let results = rank(places);
        info!("Received {} places, kept {}", received, results.len());
        Ok(results)
    }
}

fn rank(places: Vec<PlaceResult>) -> ResultSet {
    let mut results: ResultSet = places
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|place| DisplayPlace {
            title: strip_markup(&place.title),
            distance_label: format_distance(place.distance_meters),
            distance_meters: place.distance_meters,
            coordinate: place.coordinate,
        })
        .collect();
    // Stable, so equal distances keep the service's order.
    results.sort_by_key(|p| p.distance_meters);
    results
}
