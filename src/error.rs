use thiserror::Error;

/// Boxed cause carried by collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("No coordinate available to search from")]
    AnchorUnavailable,
    #[error("Place search failed")]
    SearchFailed(#[source] BoxError),
    #[error("Location store error")]
    PersistenceFailed(#[from] rusqlite::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for PlacesError {
    fn from(e: reqwest::Error) -> Self {
        PlacesError::SearchFailed(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wrapped_causes_are_reported_once() {
        let err = PlacesError::SearchFailed("connection reset".into());
        assert_eq!(err.to_string(), "Place search failed");
        assert_eq!(err.source().unwrap().to_string(), "connection reset");

        let err = PlacesError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.to_string(), "Location store error");
        assert!(err.source().is_some());
    }
}
