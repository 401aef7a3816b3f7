use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::api::{app_state::AppState, dto::ActivitiesResponse};

pub async fn list_activities(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Listing {} activities", state.catalog.len());

    Json(ActivitiesResponse {
        activities: state.catalog.list_activities().to_vec(),
    })
}
