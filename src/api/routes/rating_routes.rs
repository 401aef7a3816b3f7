//! Rating Routes
//!
//! Submission and history endpoints.

use crate::api::handlers::rating_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// Rating submission and history routes
pub fn create_rating_router() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(submit_ratings))
        .route("/history", get(get_history))
}
