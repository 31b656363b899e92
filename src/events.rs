//! Event types and channel for the search session.
//!
//! Background tasks (the geolocation lookup, in-flight searches) report back
//! through [`EventHandler::tx`]; the session loop drains them with
//! [`EventHandler::next`] and applies them to [`App`](crate::app::App) one
//! at a time, so result replacement never interleaves.

use crate::app::SearchTicket;
use crate::error::Result;
use crate::models::{Coordinate, ResultSet};
use tokio::sync::mpsc;

/// Events processed by the session loop.
#[derive(Debug)]
pub enum Event {
    /// A new live device position.
    LiveFix(Coordinate),
    /// A search finished, successfully or not.
    SearchCompleted {
        /// Ticket taken when the search was started.
        ticket: SearchTicket,
        outcome: Result<ResultSet>,
    },
}

/// Holds an unbounded channel: the sender can be cloned into spawned tasks
/// while the receiver stays with the session loop.
pub struct EventHandler {
    pub tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Receives the next event. Returns `None` once every sender is dropped,
    /// including the one held by this handler, so in practice it waits.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
