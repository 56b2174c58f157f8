use crate::models::HealthResponse;
use crate::storage::Store;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Pings the document store.
///
/// ## Response
///
/// - **200 OK**: store reachable, `status` is "UP"
/// - **503 Service Unavailable**: store did not answer, `status` is "DOWN"
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(store: web::Data<dyn Store>) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::up()),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the database");
            HttpResponse::ServiceUnavailable().json(HealthResponse::down())
        }
    }
}

/// # Route Configuration
///
/// Registers the health endpoint with the Actix-web service configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Service and database health
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use crate::models::HealthResponse;
    use crate::routes::testing::{create_test_app, store_failure};
    use crate::storage::MockStore;
    use actix_web::test;

    #[actix_web::test]
    async fn test_health_endpoint_up() {
        let mut store = MockStore::new();
        store.expect_ping().times(1).returning(|| Ok(()));
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        // Verify response body

        let health: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health.status, "UP");
        assert!(!health.timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_health_endpoint_down() {
        let mut store = MockStore::new();
        store.expect_ping().times(1).returning(|| Err(store_failure()));
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 503);
        let health: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health.status, "DOWN");
        assert_eq!(health.database, "unreachable");
    }
}
