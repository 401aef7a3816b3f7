//! Activity DTO

use serde::{Deserialize, Serialize};

/// `GET /api/activities`
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<String>,
}
