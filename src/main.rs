use actix_web::{App, HttpServer, web};
use contact_api::config::{self, AppConfig};
use contact_api::error::not_found;
use contact_api::middleware::{RequestTracing, cors};
use contact_api::openapi::ApiDoc;
use contact_api::storage::{MongoStore, Store};
use contact_api::telemetry::init_tracing;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Contact API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST endpoints under `/api` (see `contact_api::routes::configure`)
/// - Swagger UI for API documentation
/// - A MongoDB store shared by every worker
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - API: `/api/...`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `MONGO_URL` and `DB_NAME` are required; startup aborts without them
/// - Binds to `HOST:PORT`, `0.0.0.0:8001` by default
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info", config::log_format_from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let store = MongoStore::connect(&config.mongo_url, &config.db_name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "could not create MongoDB client");
            std::io::Error::other(e)
        })?;

    match store.ping().await {
        Ok(()) => tracing::info!(database = %config.db_name, "connected to MongoDB"),
        Err(e) => tracing::warn!(error = %e, "MongoDB not reachable yet; continuing"),
    }
    if let Err(e) = store.ensure_indexes().await {
        tracing::warn!(error = %e, "could not create contacts index");
    }

    let shared: Arc<dyn Store> = Arc::new(store.clone());
    tracing::info!(host = %config.host, port = config.port, "starting HTTP server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(cors())
            .wrap(RequestTracing)
            .app_data(web::Data::from(shared.clone()))
            .configure(contact_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            .default_service(web::to(not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    tracing::info!("HTTP server stopped; closing MongoDB client");
    store.shutdown().await;
    Ok(())
}
