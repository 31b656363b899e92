//! Search anchor resolution and live position lookup.
//!
//! [`resolve_anchor`] decides which coordinate a search starts from given
//! what the session currently knows. [`get_current_location`] provides the
//! live half of that knowledge via IP geolocation.

use crate::models::{Coordinate, SearchAnchor};
use ipgeolocate::{Locator, Service};
use tracing::{error, info};

/// Picks the anchor for the next search.
///
/// A persisted coordinate always wins, even when a live fix is also known.
/// Without either the anchor is [`AnchorSource::None`](crate::models::AnchorSource::None)
/// and searching from it fails with `AnchorUnavailable`.
pub fn resolve_anchor(live: Option<Coordinate>, persisted: Option<Coordinate>) -> SearchAnchor {
    match (persisted, live) {
        (Some(p), _) => SearchAnchor::persisted(p),
        (None, Some(l)) => SearchAnchor::live(l),
        (None, None) => SearchAnchor::none(),
    }
}

/// Resolves the device's approximate location via IP geolocation.
///
/// Uses the [IpApi](https://ip-api.com/) service. An empty `ip` asks the
/// service about the address the request comes from, i.e. this machine.
/// Returns `None` when the service fails or reports coordinates that don't
/// parse; there is no hardcoded fallback, the session keeps whatever anchor
/// it already had.
pub async fn get_current_location(ip: &str) -> Option<Coordinate> {
    match Locator::get(ip, Service::IpApi).await {
        Ok(loc) => {
            let lat = loc.latitude.parse::<f64>().ok()?;
            let lon = loc.longitude.parse::<f64>().ok()?;
            info!("Geolocation successful - ({}, {})", lat, lon);
            Some(Coordinate::new(lat, lon))
        }
        Err(e) => {
            error!("Error using geolocation service: {}. No live position.", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnchorSource;

    const SAVED: Coordinate = Coordinate {
        latitude: 14.586716,
        longitude: 121.062449,
    };
    const DEVICE: Coordinate = Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    };

    #[test]
    fn persisted_wins_over_live() {
        let anchor = resolve_anchor(Some(DEVICE), Some(SAVED));
        assert_eq!(anchor.source(), AnchorSource::Persisted);
        assert_eq!(anchor.coordinate(), Some(SAVED));
    }

    #[test]
    fn persisted_alone() {
        assert_eq!(resolve_anchor(None, Some(SAVED)), SearchAnchor::persisted(SAVED));
    }

    #[test]
    fn live_used_without_persisted() {
        let anchor = resolve_anchor(Some(DEVICE), None);
        assert_eq!(anchor.source(), AnchorSource::Live);
        assert_eq!(anchor.coordinate(), Some(DEVICE));
    }

    #[test]
    fn none_only_when_both_absent() {
        let anchor = resolve_anchor(None, None);
        assert_eq!(anchor.source(), AnchorSource::None);
        assert_eq!(anchor.coordinate(), None);

        for (live, persisted) in [(Some(DEVICE), None), (None, Some(SAVED)), (Some(DEVICE), Some(SAVED))] {
            assert_ne!(resolve_anchor(live, persisted).source(), AnchorSource::None);
        }
    }
}
