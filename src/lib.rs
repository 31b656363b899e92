pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod format;
pub mod location;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod ui;
