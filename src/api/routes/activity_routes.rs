use crate::api::handlers::activity_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

pub fn create_activity_router() -> Router<AppState> {
    Router::new().route("/activities", get(list_activities))
}
