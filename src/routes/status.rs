use crate::error::{ApiError, ErrorResponse};
use crate::models::status::STATUS_LIST_LIMIT;
use crate::models::{NewStatusCheck, StatusCheck};
use crate::storage::Store;
use actix_web::{HttpResponse, web};
use validator::Validate;

/// Records a heartbeat for `client_name` with a server-assigned id and
/// timestamp.
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = NewStatusCheck,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
pub async fn create_status_check(
    payload: web::Json<NewStatusCheck>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let check = StatusCheck::new(payload);
    store.insert_status_check(&check).await.map_err(|e| {
        tracing::error!(error = %e, id = %check.id, "Failed to create status check");
        ApiError::Internal("Failed to create status check")
    })?;

    Ok(HttpResponse::Ok().json(check))
}

/// Lists up to 1000 status checks in insertion order.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Recorded status checks", body = [StatusCheck]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
pub async fn list_status_checks(store: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    let checks = store
        .list_status_checks(STATUS_LIST_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list status checks");
            ApiError::Internal("Failed to list status checks")
        })?;

    Ok(HttpResponse::Ok().json(checks))
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `POST /status`: Record a status check
/// - `GET /status`: List recorded status checks
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/status")
            .route(web::post().to(create_status_check))
            .route(web::get().to(list_status_checks)),
    );
}

#[cfg(test)]
mod tests {
    use crate::models::{NewStatusCheck, StatusCheck};
    use crate::routes::testing::{create_test_app, read_json, store_failure};
    use crate::storage::MockStore;
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn test_create_status_check() {
        let mut store = MockStore::new();
        store
            .expect_insert_status_check()
            .withf(|check: &StatusCheck| check.client_name == "landing-page")
            .times(1)
            .returning(|_| Ok(()));
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "landing-page" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let check: StatusCheck = test::read_body_json(resp).await;
        assert_eq!(check.client_name, "landing-page");
        assert!(!check.id.is_empty());
    }

    #[actix_web::test]
    async fn test_empty_client_name_is_rejected() {
        let mut store = MockStore::new();
        store.expect_insert_status_check().never();
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 422);
        let body = read_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["fields"][0]["field"], "client_name");
    }

    #[actix_web::test]
    async fn test_missing_client_name_is_rejected() {
        // No expectations: any store call fails the test
        let app = create_test_app(MockStore::new()).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 422);
        let body = read_json(resp).await;
        assert_eq!(body["error"], "INVALID_BODY");
        assert_eq!(body["fields"][0]["field"], "client_name");
    }

    #[actix_web::test]
    async fn test_storage_failure_is_generic_500() {
        let mut store = MockStore::new();
        store
            .expect_insert_status_check()
            .returning(|_| Err(store_failure()));
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "probe" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
        let body = read_json(resp).await;
        assert_eq!(body["message"], "Failed to create status check");
        assert!(!body.to_string().contains("connection reset"));
    }

    #[actix_web::test]
    async fn test_list_status_checks_caps_at_one_thousand() {
        let mut store = MockStore::new();
        store
            .expect_list_status_checks()
            .withf(|limit: &i64| *limit == 1000)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    StatusCheck::new(NewStatusCheck {
                        client_name: "a".to_string(),
                    }),
                    StatusCheck::new(NewStatusCheck {
                        client_name: "b".to_string(),
                    }),
                ])
            });
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        let checks: Vec<StatusCheck> = test::read_body_json(resp).await;
        let names: Vec<&str> = checks.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[actix_web::test]
    async fn test_list_status_checks_storage_failure() {
        let mut store = MockStore::new();
        store
            .expect_list_status_checks()
            .returning(|_| Err(store_failure()));
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
    }
}
