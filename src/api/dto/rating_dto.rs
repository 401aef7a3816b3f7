//! Rating DTO
//!
//! Responses for rating submission and history. The submission request is
//! validated from raw JSON, see `api::validation`.

use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::entry::SessionEntry;

/// Response header naming the analysis provenance (`model` or `placeholder`).
pub const ANALYSIS_SOURCE_HEADER: &str = "x-analysis-source";

/// `POST /api/ratings`
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRatingsResponse {
    pub success: bool,
    pub entry_id: String,
    pub analysis: AnalysisResult,
}

/// `GET /api/history`
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<SessionEntry>,
}
