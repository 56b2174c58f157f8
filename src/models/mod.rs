use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Contact Models
///
/// The stored [`contact::Contact`] record, the [`contact::NewContact`]
/// submission body with its field rules, and the [`contact::ContactQuery`]
/// listing parameters.
pub mod contact;

/// # Health Status Response
///
/// Service and database reachability, returned by `GET /api/health`.
pub mod health;

/// # Status Check Models
///
/// Client heartbeat records and their creation body.
pub mod status;

pub use contact::{Contact, ContactQuery, NewContact};
pub use health::HealthResponse;
pub use status::{NewStatusCheck, StatusCheck};

/// Greeting returned by `GET /api/`.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Hello World")]
    pub message: String,
}

impl RootResponse {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
