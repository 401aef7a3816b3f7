use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    api::{app_state::AppState, dto::HealthResponse},
    error::AppError,
    models::entry::now_iso8601,
};

pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries_count = state.store.count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: now_iso8601(),
        entries_count,
    }))
}
