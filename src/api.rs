use crate::config::ApiConfig;
use crate::error::{PlacesError, Result};
use crate::models::{Coordinate, PlaceResult, PlacesResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// The external place-search service.
///
/// Implementations return places in the order the service ranked them;
/// callers rely on that order when truncating.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, location: Coordinate, query: &str) -> Result<Vec<PlaceResult>>;
}

pub struct HttpPlaceSearch {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpPlaceSearch {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PlaceSearch for HttpPlaceSearch {
    async fn search(&self, location: Coordinate, query: &str) -> Result<Vec<PlaceResult>> {
        let at = format!("{},{}", location.latitude, location.longitude);
        debug!("GET {} at={} q={:?}", self.endpoint, at, query);

        let res = self
            .client
            .get(&self.endpoint)
            .query(&[("at", at.as_str()), ("q", query), ("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<PlacesResponse>()
            .await
            .map_err(|e| PlacesError::SearchFailed(Box::new(e)))?;

        Ok(res.into_places())
    }
}
