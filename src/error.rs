use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single violated field in a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "VALIDATION_ERROR")]
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body: {message}")]
    InvalidBody {
        message: String,
        field: Option<String>,
    },

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("not found")]
    NotFound,

    /// The message is returned to the caller verbatim; log the cause before
    /// constructing this.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::InvalidBody { .. } => "INVALID_BODY",
            ApiError::InvalidQuery(_) => "INVALID_QUERY",
            ApiError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn body(&self) -> ErrorResponse {
        let (message, fields) = match self {
            ApiError::Validation(errors) => {
                ("Request validation failed".to_string(), field_errors(errors))
            }
            ApiError::InvalidBody { message, field } => (
                message.clone(),
                field
                    .iter()
                    .map(|field| FieldError {
                        field: field.clone(),
                        code: "missing".to_string(),
                        message: format!("{field} is required"),
                    })
                    .collect(),
            ),
            ApiError::InvalidQuery(message) | ApiError::PayloadTooLarge(message) => {
                (message.clone(), Vec::new())
            }
            ApiError::NotFound => ("Not Found".to_string(), Vec::new()),
            ApiError::Internal(message) => (message.to_string(), Vec::new()),
        };

        ErrorResponse {
            error: self.code().to_string(),
            message,
            fields,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody { .. } | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        let field = match &err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                return ApiError::PayloadTooLarge(err.to_string());
            }
            JsonPayloadError::Deserialize(inner) => missing_field(&inner.to_string()),
            _ => None,
        };
        ApiError::InvalidBody {
            message: err.to_string(),
            field,
        }
    }
}

impl From<QueryPayloadError> for ApiError {
    fn from(err: QueryPayloadError) -> Self {
        ApiError::InvalidQuery(err.to_string())
    }
}

/// Installed on `web::JsonConfig` so body errors answer 422 instead of 400,
/// and oversized bodies 413.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(err).into()
}

/// Installed on `web::QueryConfig` so malformed query strings answer 422.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(err).into()
}

/// Default service for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldError {
                field: field.clone(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Pulls the field name out of serde's "missing field `x` at line ..".
fn missing_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
