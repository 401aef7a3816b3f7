//! History storage
//!
//! Rating history persistence: an in-memory store and a JSON file mirror.

pub mod factory;
pub mod json_file;
pub mod repository;

pub use factory::create_rating_store;
pub use json_file::JsonFileRatingStore;
pub use repository::{InMemoryRatingStore, RatingStore};
