use super::{Store, StoreError};
use crate::models::{Contact, StatusCheck};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";
pub const CONTACTS_COLLECTION: &str = "contacts";

/// Stored shape of a [`StatusCheck`]. Times are BSON dates so the server can
/// compare them; the API layer exposes them as RFC 3339 strings.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckRecord {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContactRecord {
    id: String,
    name: String,
    email: String,
    message: String,
    created_at: bson::DateTime,
}

impl From<&StatusCheck> for StatusCheckRecord {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id.clone(),
            client_name: check.client_name.clone(),
            timestamp: bson::DateTime::from_chrono(check.timestamp),
        }
    }
}

impl From<StatusCheckRecord> for StatusCheck {
    fn from(record: StatusCheckRecord) -> Self {
        Self {
            id: record.id,
            client_name: record.client_name,
            timestamp: record.timestamp.to_chrono(),
        }
    }
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
            created_at: bson::DateTime::from_chrono(contact.created_at),
        }
    }
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            message: record.message,
            created_at: record.created_at.to_chrono(),
        }
    }
}

/// Document store client holding the `status_checks` and `contacts`
/// collections of one database.
///
/// Cloning is cheap; every clone shares the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    status_checks: Collection<StatusCheckRecord>,
    contacts: Collection<ContactRecord>,
}

impl MongoStore {
    /// Parses `uri` and builds the client. The driver connects lazily, so an
    /// unreachable server only shows up on the first operation.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::from_client(client, db_name))
    }

    pub fn from_client(client: Client, db_name: &str) -> Self {
        let database = client.database(db_name);
        Self {
            status_checks: database.collection(STATUS_CHECKS_COLLECTION),
            contacts: database.collection(CONTACTS_COLLECTION),
            database,
            client,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Creates the descending `created_at` index used to list contacts.
    /// Idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder().keys(doc! { "created_at": -1 }).build();
        self.contacts.create_index(index).await?;
        Ok(())
    }

    /// Closes the connection pool. Call once, after the HTTP server stops.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.status_checks
            .insert_one(StatusCheckRecord::from(check))
            .await?;
        tracing::debug!(id = %check.id, "status check stored");
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        let records: Vec<StatusCheckRecord> = self
            .status_checks
            .find(doc! {})
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(records.into_iter().map(StatusCheck::from).collect())
    }

    async fn insert_contact(&self, contact: &Contact) -> Result<(), StoreError> {
        self.contacts.insert_one(ContactRecord::from(contact)).await?;
        tracing::debug!(id = %contact.id, "contact stored");
        Ok(())
    }

    async fn list_contacts(&self, limit: i64) -> Result<Vec<Contact>, StoreError> {
        let records: Vec<ContactRecord> = self
            .contacts
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(records.into_iter().map(Contact::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewContact, NewStatusCheck};

    #[test]
    fn contact_record_round_trips_through_bson() {
        let contact = Contact::new(NewContact {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            message: "hello".to_string(),
        });

        let document = bson::to_document(&ContactRecord::from(&contact)).unwrap();
        assert!(matches!(
            document.get("created_at"),
            Some(bson::Bson::DateTime(_))
        ));
        assert_eq!(document.get_str("id").unwrap(), contact.id);

        let record: ContactRecord = bson::from_document(document).unwrap();
        assert_eq!(Contact::from(record), contact);
    }

    #[test]
    fn status_record_stores_timestamp_as_date() {
        let check = StatusCheck::new(NewStatusCheck {
            client_name: "probe".to_string(),
        });

        let document = bson::to_document(&StatusCheckRecord::from(&check)).unwrap();
        assert!(matches!(
            document.get("timestamp"),
            Some(bson::Bson::DateTime(_))
        ));
        assert_eq!(document.get_str("client_name").unwrap(), "probe");
    }

    #[test]
    fn records_ignore_the_object_id() {
        let document = doc! {
            "_id": bson::oid::ObjectId::new(),
            "id": "abc",
            "client_name": "probe",
            "timestamp": bson::DateTime::now(),
        };
        let record: StatusCheckRecord = bson::from_document(document).unwrap();
        assert_eq!(StatusCheck::from(record).id, "abc");
    }
}
