use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Most records `GET /api/status` will return.
pub const STATUS_LIST_LIMIT: i64 = 1000;

/// Heartbeat record left by a client. Never updated once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    #[schema(example = "3f2c1e0a-8b7d-4c55-9a4e-2d1f6b0c9e11")]
    pub id: String,
    #[schema(example = "landing-page")]
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/status`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewStatusCheck {
    #[validate(length(min = 1, message = "client_name must not be empty"))]
    #[schema(example = "landing-page", min_length = 1)]
    pub client_name: String,
}

impl StatusCheck {
    /// Stamps a fresh id and the current time (millisecond precision, the
    /// resolution the store keeps).
    pub fn new(input: NewStatusCheck) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: input.client_name,
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}
