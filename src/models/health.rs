use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Reports whether the service and its document store are reachable.
///
/// ## Fields
/// - `status`: "UP" when the store answered a ping, "DOWN" otherwise
/// - `database`: "connected" or "unreachable"
/// - `timestamp`: RFC 3339 time of the check
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "database": "connected",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            database: "connected".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
            database: "unreachable".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}
