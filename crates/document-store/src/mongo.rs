use std::time::Instant;

use async_trait::async_trait;
use bson::{Bson, doc};
use mongodb::{Client, Collection};
use serde_json::Value;

use crate::{
    Document, DocumentId, DocumentStoreError, Result,
    document::json_type_name,
    store::{DocumentStore, StoreLocation},
};

/// MongoDB-backed document store implementation.
///
/// Cloning is cheap; clones share the driver's connection pool.
#[derive(Clone)]
pub struct MongoDocumentStore {
    client: Client,
    collection: Collection<bson::Document>,
    location: StoreLocation,
}

impl MongoDocumentStore {
    /// Creates a store over an existing client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let handle = client.database(database).collection(collection);
        Self {
            client,
            collection: handle,
            location: StoreLocation::new(database, collection),
        }
    }

    /// Builds a pooled client from `uri` and opens the given collection.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first read rather than here.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        tracing::info!(database, collection, "document store client created");
        Ok(Self::new(client, database, collection))
    }

    /// Gets a reference to the underlying collection handle.
    pub fn collection(&self) -> &Collection<bson::Document> {
        &self.collection
    }

    /// Shuts the client down, closing pooled connections.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!(location = %self.location, "document store client closed");
    }

    fn to_document(id: DocumentId, raw: bson::Document) -> Result<Document> {
        match Bson::Document(raw).into_relaxed_extjson() {
            Value::Object(body) => Ok(Document::new(id, body)),
            other => Err(DocumentStoreError::Conversion(format!(
                "document {id} converted to {}",
                json_type_name(&other)
            ))),
        }
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>> {
        let started = Instant::now();
        let result = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await;
        metrics::histogram!("document_store_find_seconds")
            .record(started.elapsed().as_secs_f64());

        match result {
            Ok(Some(raw)) => Self::to_document(id, raw).map(Some),
            Ok(None) => Ok(None),
            Err(e) => {
                tracing::error!(error = %e, "document lookup failed");
                Err(DocumentStoreError::Database(e))
            }
        }
    }

    fn location(&self) -> &StoreLocation {
        &self.location
    }
}
