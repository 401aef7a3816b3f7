//! Store factory
//!
//! Builds the history store selected by the storage configuration.

use std::sync::Arc;

use crate::config::config::StorageConfig;
use crate::error::{AppError, Result};
use crate::storage::json_file::JsonFileRatingStore;
use crate::storage::repository::{InMemoryRatingStore, RatingStore};

/// Build the store selected by `config.backend` and load its history.
pub async fn create_rating_store(config: &StorageConfig) -> Result<Arc<dyn RatingStore>> {
    match config.backend.as_str() {
        "json_file" => Ok(Arc::new(
            JsonFileRatingStore::load(config.data_file.clone()).await,
        )),
        "memory" => Ok(Arc::new(InMemoryRatingStore::new())),
        other => Err(AppError::Config(format!(
            "unknown storage backend: {}",
            other
        ))),
    }
}
