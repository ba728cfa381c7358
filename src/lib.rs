//! Place Concierge - place recommendations narrated by an LLM guide
//!
//! Resolves a location name with Google Geocoding, picks a venue from Google
//! Nearby Search, looks up its website, and asks a chat completion model to
//! describe it. Results are served as JSON and as HTML pages.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use core::Concierge;
pub use error::GuideError;
pub use models::{Coordinate, PlaceQuery, PlaceRecord, Narrative, Recommendation};
