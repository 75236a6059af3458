// src/matching/mod.rs

pub mod address;
pub mod composite;
pub mod location;
pub mod name;
pub mod quality;

pub use address::{calculate_address_similarity, score_address_match};
pub use composite::score_candidate;
pub use location::score_location_context;
pub use name::score_name_match;
pub use quality::score_data_quality;
