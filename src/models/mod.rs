// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, PlaceQuery, PlaceRecord, OpenStatus, Narrative, Recommendation};
pub use requests::PlaceSearchParams;
pub use responses::{ChatResponse, HealthResponse, ErrorResponse};
