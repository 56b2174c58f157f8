use crate::models::{Contact, StatusCheck};
use async_trait::async_trait;
use thiserror::Error;

/// MongoDB-backed [`Store`] used in production.
pub mod mongo;

pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence operations the HTTP handlers depend on.
///
/// Handlers receive this as `web::Data<dyn Store>`, built once at startup and
/// shared by every worker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Round-trips to the database.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError>;

    /// Returns at most `limit` status checks in insertion order.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;

    async fn insert_contact(&self, contact: &Contact) -> Result<(), StoreError>;

    /// Returns at most `limit` contacts, newest `created_at` first. Equal
    /// timestamps come back in reverse insertion order.
    async fn list_contacts(&self, limit: i64) -> Result<Vec<Contact>, StoreError>;
}
