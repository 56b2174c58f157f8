use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_CONTACT_LIMIT: i64 = 100;
pub const MAX_CONTACT_LIMIT: i64 = 1000;

/// A submitted contact-form inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[schema(example = "9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "hello")]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/contacts`.
///
/// Lengths are counted in characters. Any `id` or `created_at` in the body is
/// ignored; both are assigned by [`Contact::new`].
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewContact {
    #[validate(length(min = 1, max = 120, message = "name must be 1 to 120 characters"))]
    #[schema(example = "John Doe", min_length = 1, max_length = 120)]
    pub name: String,

    #[validate(custom(function = "crate::validation::email::validate_email"))]
    #[schema(example = "john.doe@example.com")]
    pub email: String,

    #[validate(length(min = 1, max = 4000, message = "message must be 1 to 4000 characters"))]
    #[schema(example = "hello", min_length = 1, max_length = 4000)]
    pub message: String,
}

/// Query string of `GET /api/contacts`.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactQuery {
    /// Maximum number of contacts to return (1-1000).
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    #[param(minimum = 1, maximum = 1000, default = 100)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_CONTACT_LIMIT
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONTACT_LIMIT,
        }
    }
}

impl Contact {
    pub fn new(input: NewContact) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}
