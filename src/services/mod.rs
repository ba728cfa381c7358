// Service exports
pub mod completion;
pub mod maps;

pub use completion::{ChatMessage, CompletionClient, CompletionError, Role};
pub use maps::{MapsClient, MapsError, NearbySearch};
