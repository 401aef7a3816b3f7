use crate::api::handlers::system_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

pub fn create_system_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
