//! System DTO

use serde::{Deserialize, Serialize};

/// `GET /api/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub entries_count: usize,
}
