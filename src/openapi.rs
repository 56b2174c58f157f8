use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers and the `ToSchema` derives on the models. Served by Swagger UI at
/// `/swagger-ui/` with the raw document at `/api-docs/openapi.json`.
///
/// # Tags
/// 1. **General**: greeting
/// 2. **Health Check**: service and database health
/// 3. **Status**: client heartbeat log
/// 4. **Contacts**: contact form submissions
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
        crate::routes::contacts::create_contact,
        crate::routes::contacts::list_contacts,
    ),
    components(
        schemas(
            crate::models::RootResponse,
            crate::models::health::HealthResponse,
            crate::models::status::StatusCheck,
            crate::models::status::NewStatusCheck,
            crate::models::contact::Contact,
            crate::models::contact::NewContact,
            crate::error::ErrorResponse,
            crate::error::FieldError
        )
    ),
    tags(
        (name = "General", description = "Service greeting"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status", description = "Client status check log"),
        (name = "Contacts", description = "Contact form submissions")
    ),
    info(
        description = "Contact form and status log API backed by MongoDB",
        title = "Contact API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
