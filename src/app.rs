use crate::api::PlaceSearch;
use crate::db::CoordinateStore;
use crate::error::{PlacesError, Result};
use crate::events::Event;
use crate::location::resolve_anchor;
use crate::models::{Coordinate, ResultSet, SearchAnchor};
use crate::pipeline::SearchPipeline;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

/// Identifies one search invocation. Later searches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Where the map should be centered and how the center marker is labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFocus {
    pub coordinate: Coordinate,
    pub label: &'static str,
}

/// State of one search session.
///
/// Owns the live and persisted positions and the current [`ResultSet`].
/// Results are only replaced through [`App::complete_search`], which drops
/// completions from any search other than the latest one started.
pub struct App<St> {
    store: St,
    pub live_position: Option<Coordinate>,
    pub persisted_position: Option<Coordinate>,
    pub results: ResultSet,
    pub is_searching: bool,
    latest_ticket: u64,
}

impl<St: CoordinateStore> App<St> {
    /// Starts a session, reading the saved location from `store`.
    /// On first run the store is empty and `default_location` is saved.
    pub fn new(store: St, default_location: Coordinate) -> Result<Self> {
        let persisted = match store.load()? {
            Some(c) => c,
            None => {
                info!("No saved location, seeding default");
                store.save(default_location)?;
                default_location
            }
        };

        Ok(Self {
            store,
            live_position: None,
            persisted_position: Some(persisted),
            results: ResultSet::new(),
            is_searching: false,
            latest_ticket: 0,
        })
    }

    pub fn anchor(&self) -> SearchAnchor {
        resolve_anchor(self.live_position, self.persisted_position)
    }

    pub fn update_live_position(&mut self, coordinate: Coordinate) {
        self.live_position = Some(coordinate);
    }

    /// Re-reads the store. The persisted position is cleared first, so an
    /// empty store leaves the session without one.
    pub fn load_saved_location(&mut self) -> Result<Option<Coordinate>> {
        self.persisted_position = None;
        self.persisted_position = self.store.load()?;
        Ok(self.persisted_position)
    }

    /// Saves the live position, or re-saves the persisted one when there is
    /// no live fix. The saved coordinate becomes the persisted position.
    pub fn save_current_location(&mut self) -> Result<Coordinate> {
        let coordinate = self
            .live_position
            .or(self.persisted_position)
            .ok_or(PlacesError::AnchorUnavailable)?;
        self.store.save(coordinate)?;
        self.persisted_position = Some(coordinate);
        Ok(coordinate)
    }

    pub fn map_focus(&self) -> Option<MapFocus> {
        let coordinate = self.anchor().coordinate()?;
        let label = if self.live_position.is_none() {
            "Initial location"
        } else {
            "User location"
        };
        Some(MapFocus { coordinate, label })
    }

    /// Takes a ticket for a new search and clears the current results.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_ticket += 1;
        self.results.clear();
        self.is_searching = true;
        SearchTicket(self.latest_ticket)
    }

    /// Applies the outcome of the search that took `ticket`.
    ///
    /// Returns `Ok(false)` and changes nothing if a newer search has started
    /// since. A failure of the latest search leaves the results empty.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<ResultSet>,
    ) -> Result<bool> {
        if ticket.0 != self.latest_ticket {
            warn!(
                "Discarding stale search {} (latest is {})",
                ticket.0, self.latest_ticket
            );
            return Ok(false);
        }

        self.is_searching = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                Ok(true)
            }
            Err(e) => {
                self.results.clear();
                Err(e)
            }
        }
    }

    /// Starts a search on the runtime; the outcome arrives as
    /// [`Event::SearchCompleted`] on `tx`.
    pub fn spawn_search<S>(
        &mut self,
        pipeline: Arc<SearchPipeline<S>>,
        query: String,
        tx: UnboundedSender<Event>,
    ) -> SearchTicket
    where
        S: PlaceSearch + 'static,
    {
        let ticket = self.begin_search();
        let anchor = self.anchor();
        tokio::spawn(async move {
            let outcome = pipeline.execute(&anchor, &query).await;
            let _ = tx.send(Event::SearchCompleted { ticket, outcome });
        });
        ticket
    }

    /// Applies one event. Returns whether it changed the result set.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::LiveFix(coordinate) => {
                self.update_live_position(coordinate);
                Ok(false)
            }
            Event::SearchCompleted { ticket, outcome } => self.complete_search(ticket, outcome),
        }
    }
}
