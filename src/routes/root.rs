use crate::models::RootResponse;
use actix_web::{HttpResponse, Responder, get};

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Greeting", body = RootResponse)
    ),
    tag = "General"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse::hello())
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /`: Greeting
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
