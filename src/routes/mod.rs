use crate::error::{json_error_handler, not_found, query_error_handler};
use actix_web::web;

/// # Root Greeting
///
/// `GET /api/` answers `{"message": "Hello World"}`.
pub mod root;

/// # Health Check Endpoint
///
/// Pings the document store and reports the service as UP (200) or DOWN (503).
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "database": "connected",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
pub mod health;

/// # Status Check Endpoints
///
/// - `POST /api/status`: record a heartbeat for `client_name`
/// - `GET /api/status`: list up to 1000 heartbeats in insertion order
pub mod status;

/// # Contact Form Endpoints
///
/// - `POST /api/contacts`: validate and store a submission (201)
/// - `GET /api/contacts?limit=N`: newest submissions first, `limit` in 1..=1000
///
/// ## Example Request
/// ```json
/// { "name": "John Doe", "email": "john.doe@example.com", "message": "hello" }
/// ```
pub mod contacts;

/// # API Route Configuration
///
/// Mounts every endpoint under `/api` and installs the JSON body and query
/// string error handlers, so malformed input answers 422 with an
/// [`ErrorResponse`](crate::error::ErrorResponse) body. Unmatched paths under
/// `/api` answer a JSON 404.
///
/// ```text
/// GET  /api/              - greeting
/// GET  /api/health        - service and database health
/// POST /api/status        - record a status check
/// GET  /api/status        - list status checks
/// POST /api/contacts      - submit the contact form
/// GET  /api/contacts      - list contact submissions
/// ```
///
/// Handlers expect a `web::Data<dyn Store>` in application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .configure(root::configure_routes)
                .configure(health::configure_routes)
                .configure(status::configure_routes)
                .configure(contacts::configure_routes)
                .default_service(web::to(not_found)),
        );
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::storage::{MockStore, Store, StoreError};
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::{App, test, web};
    use std::sync::Arc;

    /// Full `/api` routing over a mocked store.
    pub async fn create_test_app(
        store: MockStore,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        let store: Arc<dyn Store> = Arc::new(store);
        test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(super::configure),
        )
        .await
    }

    pub fn store_failure() -> StoreError {
        StoreError::Database(std::io::Error::other("connection reset by peer").into())
    }

    pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).expect("Body should be valid JSON")
    }
}
