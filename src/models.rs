use serde::{Deserialize, Serialize};

/// Upper bound on the number of places kept from one search response.
pub const RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Where the coordinate of a [`SearchAnchor`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    Persisted,
    Live,
    None,
}

/// The origin of a search together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchAnchor {
    Persisted(Coordinate),
    Live(Coordinate),
    None,
}

impl SearchAnchor {
    pub fn persisted(coordinate: Coordinate) -> Self {
        SearchAnchor::Persisted(coordinate)
    }

    pub fn live(coordinate: Coordinate) -> Self {
        SearchAnchor::Live(coordinate)
    }

    pub fn none() -> Self {
        SearchAnchor::None
    }

    pub fn source(&self) -> AnchorSource {
        match self {
            SearchAnchor::Persisted(_) => AnchorSource::Persisted,
            SearchAnchor::Live(_) => AnchorSource::Live,
            SearchAnchor::None => AnchorSource::None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match *self {
            SearchAnchor::Persisted(c) | SearchAnchor::Live(c) => Some(c),
            SearchAnchor::None => None,
        }
    }
}

/// A raw place as returned by the place-search collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub title: String,
    pub distance_meters: u64,
    pub coordinate: Coordinate,
}

/// A search result ready for display: markup removed, distance labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPlace {
    pub title: String,
    pub distance_meters: u64,
    pub distance_label: String,
    pub coordinate: Coordinate,
}

/// Ordered, capped result of one search. Replaced wholesale on every search.
pub type ResultSet = Vec<DisplayPlace>;

#[derive(Deserialize)]
pub struct PlacesResponse {
    pub results: Option<PlacesResults>,
}

#[derive(Deserialize)]
pub struct PlacesResults {
    #[serde(default)]
    pub items: Vec<PlaceItem>,
}

#[derive(Deserialize)]
pub struct PlaceItem {
    #[serde(default)]
    pub title: String,
    pub distance: Option<u64>,
    pub position: Option<Vec<f64>>,
}

// Unmarshal one item of the places response. Items without a distance or
// a [lat, lon] position can't be ranked or placed on the map.
impl TryFrom<PlaceItem> for PlaceResult {
    type Error = ();

    fn try_from(item: PlaceItem) -> Result<Self, Self::Error> {
        let distance_meters = item.distance.ok_or(())?;
        let position = item.position.ok_or(())?;
        match position.as_slice() {
            [lat, lon, ..] => Ok(Self {
                title: item.title,
                distance_meters,
                coordinate: Coordinate::new(*lat, *lon),
            }),
            _ => Err(()),
        }
    }
}

impl PlacesResponse {
    pub fn into_places(self) -> Vec<PlaceResult> {
        self.results
            .map(|r| r.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| PlaceResult::try_from(item).ok())
            .collect()
    }
}
