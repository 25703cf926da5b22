use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Returned when a string is not a well-formed document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ObjectId format: {input:?}")]
pub struct InvalidDocumentId {
    pub input: String,
}

/// Unique identifier for a stored document.
///
/// Wraps the storage layer's native ObjectId. The canonical text form is
/// 24 lowercase hex characters; parsing accepts either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Creates a new identifier the way the storage layer would.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a 24-character hex string.
    pub fn parse(input: &str) -> Result<Self, InvalidDocumentId> {
        if input.len() != 24 {
            return Err(InvalidDocumentId {
                input: input.to_string(),
            });
        }
        ObjectId::parse_str(input)
            .map(Self)
            .map_err(|_| InvalidDocumentId {
                input: input.to_string(),
            })
    }

    /// Creates a document ID from an existing ObjectId.
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Returns the underlying ObjectId.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
