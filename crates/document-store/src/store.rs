use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::{Document, DocumentId, DocumentStoreError, Result, Section, projection};

/// Where a store reads its documents from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub database: String,
    pub collection: String,
}

impl StoreLocation {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
        }
    }
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

/// Core trait for document store implementations.
///
/// A document store performs single-document reads by identifier.
/// All implementations must be safe for concurrent use (Send + Sync)
/// without external locking.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Retrieves a document by identifier.
    ///
    /// Returns None if no document has that identifier.
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>>;

    /// Returns the database and collection this store reads from.
    fn location(&self) -> &StoreLocation;
}

/// Extension trait providing convenience methods for document stores.
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Loads a document and projects `fields` out of `section`.
    ///
    /// Fails with `NotFound` when the document is absent and with
    /// `MalformedSection` when the section is present but not an object.
    async fn project_fields(
        &self,
        id: DocumentId,
        section: Section,
        fields: &[String],
    ) -> Result<BTreeMap<String, Value>> {
        let document = self
            .find_by_id(id)
            .await?
            .ok_or(DocumentStoreError::NotFound(id))?;
        let nested = document.section(section)?;
        Ok(projection::project(nested, fields))
    }

    /// Checks if a document exists.
    async fn exists(&self, id: DocumentId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// Blanket implementation for all DocumentStore implementations
impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}
