// Core pipeline exports
pub mod augment;
pub mod concierge;
pub mod finder;
pub mod narrative;
pub mod resolver;

pub use augment::augment_details;
pub use concierge::Concierge;
pub use finder::{find_nearby_place, meets_min_rating, select_place};
pub use narrative::{build_prompt, category_label, generate_narrative, localized_categories};
pub use resolver::resolve_coordinates;
