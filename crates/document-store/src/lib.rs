//! Document lookup and field projection.
//!
//! Documents are read through the [`DocumentStore`] trait, which has an
//! in-memory implementation for tests and a MongoDB implementation for
//! production. [`DocumentStoreExt::project_fields`] combines lookup,
//! section extraction and projection into a single call.

pub mod document;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod projection;
pub mod store;

pub use common::{DocumentId, InvalidDocumentId};
pub use document::{Document, Section};
pub use error::{DocumentStoreError, Result};
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;
pub use projection::project;
pub use store::{DocumentStore, DocumentStoreExt, StoreLocation};
