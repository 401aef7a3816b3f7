use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    api::{
        app_state::AppState,
        dto::{ANALYSIS_SOURCE_HEADER, HistoryResponse, SubmitRatingsResponse},
        validation::validate_submission,
    },
    error::AppError,
    models::entry::{SessionEntry, now_iso8601},
};

/// Validate, store and analyze one submission.
///
/// Nothing is stored when validation fails. The analysis itself cannot fail;
/// its provenance is reported in the `x-analysis-source` header.
pub async fn submit_ratings(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let submission = validate_submission(&body)?;

    let entry = SessionEntry::new(
        state.ids.next_id(),
        submission.timestamp.unwrap_or_else(now_iso8601),
        submission.ratings,
    );
    debug!(entry_id = %entry.id, ratings = entry.ratings.len(), "Storing submission");

    state.store.append(entry.clone()).await?;

    let outcome = state.analysis.analyze(&entry.ratings).await;
    info!(entry_id = %entry.id, source = %outcome.source, "Submission analyzed");

    let mut analysis = outcome.analysis;
    analysis.entry_id = Some(entry.id.clone());

    let header = (
        HeaderName::from_static(ANALYSIS_SOURCE_HEADER),
        HeaderValue::from_static(outcome.source.as_str()),
    );
    Ok((
        [header],
        Json(SubmitRatingsResponse {
            success: true,
            entry_id: entry.id,
            analysis,
        }),
    ))
}

pub async fn get_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let history = state.store.all().await?;
    debug!("Returning {} history entries", history.len());

    Ok(Json(HistoryResponse { history }))
}
