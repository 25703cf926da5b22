use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    Document, DocumentId, Result,
    store::{DocumentStore, StoreLocation},
};

/// In-memory document store implementation for testing.
///
/// Provides the same read interface as the MongoDB implementation, plus
/// write helpers for seeding fixtures.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentId, Document>>>,
    location: StoreLocation,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self {
            documents: Arc::default(),
            location: StoreLocation::new("memory", "documents"),
        }
    }
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store reporting the given location in diagnostics.
    pub fn with_location(location: StoreLocation) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Inserts or replaces a document.
    pub async fn insert(&self, document: Document) {
        self.documents.write().await.insert(document.id, document);
    }

    /// Inserts or replaces a document built from a JSON object.
    pub async fn insert_json(&self, id: DocumentId, body: Value) -> Result<()> {
        self.insert(Document::from_value(id, body)?).await;
        Ok(())
    }

    /// Removes a document, returning it if it was present.
    pub async fn remove(&self, id: DocumentId) -> Option<Document> {
        self.documents.write().await.remove(&id)
    }

    /// Returns the number of documents stored.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if no documents are stored.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Clears all documents.
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    fn location(&self) -> &StoreLocation {
        &self.location
    }
}
