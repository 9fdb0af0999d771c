use serde::{Deserialize, Serialize};

use crate::models::domain::{Priority, RankedMatch};

/// Response for the donor matching endpoint
///
/// The `error` key is only present when the requester city could not be
/// resolved; a well-formed request always gets HTTP 200 with this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub nearest_donors: Vec<RankedMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResponse {
    pub fn matches(nearest_donors: Vec<RankedMatch>) -> Self {
        Self {
            nearest_donors,
            error: None,
        }
    }

    /// The structured result for an unknown or missing requester city
    pub fn invalid_city() -> Self {
        Self {
            nearest_donors: Vec::new(),
            error: Some("Invalid or missing city".to_string()),
        }
    }
}

/// Response for the priority classification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityResponse {
    pub priority: Priority,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
