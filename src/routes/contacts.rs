use crate::error::{ApiError, ErrorResponse};
use crate::models::{Contact, ContactQuery, NewContact};
use crate::storage::Store;
use actix_web::{HttpResponse, web};
use validator::Validate;

/// # Contact Form Submission
///
/// Validates the submission, assigns `id` and `created_at`, and stores it.
///
/// ## Responses
/// - **201 Created**: the stored [`Contact`]
/// - **422 Unprocessable Entity**: a field is missing, has the wrong type, or
///   breaks its rule (`name` 1-120 chars, `email` well formed, `message`
///   1-4000 chars)
/// - **413 Payload Too Large**: the body exceeds the JSON size limit
/// - **500 Internal Server Error**: the store rejected the write; the body
///   carries only "Failed to create contact"
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = NewContact,
    responses(
        (status = 201, description = "Contact stored", body = Contact),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 422, description = "Invalid submission", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn create_contact(
    payload: web::Json<NewContact>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let contact = Contact::new(payload);
    store.insert_contact(&contact).await.map_err(|e| {
        tracing::error!(error = %e, id = %contact.id, "Failed to create contact");
        ApiError::Internal("Failed to create contact")
    })?;

    tracing::info!(id = %contact.id, "contact created");
    Ok(HttpResponse::Created().json(contact))
}

/// # Contact Listing
///
/// Newest submissions first. `limit` defaults to 100 and must be within
/// 1..=1000, otherwise the request fails with 422.
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ContactQuery),
    responses(
        (status = 200, description = "Contacts, newest first", body = [Contact]),
        (status = 422, description = "Invalid limit", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn list_contacts(
    query: web::Query<ContactQuery>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let contacts = store.list_contacts(query.limit).await.map_err(|e| {
        tracing::error!(error = %e, limit = query.limit, "Failed to list contacts");
        ApiError::Internal("Failed to list contacts")
    })?;

    Ok(HttpResponse::Ok().json(contacts))
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `POST /contacts`: Store a contact form submission
/// - `GET /contacts`: List submissions, newest first
///
/// Other methods on `/contacts` answer 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contacts")
            .route(web::post().to(create_contact))
            .route(web::get().to(list_contacts)),
    );
}
