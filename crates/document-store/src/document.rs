//! Stored document model and section selector.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DocumentId, DocumentStoreError, Result};

/// The nested object a projection reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    FinalAssignment,
    FinalRelease,
}

impl Section {
    /// Returns the top-level document key holding this section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::FinalAssignment => "final_assignment",
            Section::FinalRelease => "final_release",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A document as read from the store, with its body converted to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub body: Map<String, Value>,
}

impl Document {
    /// Creates a document from an already-decoded JSON object.
    pub fn new(id: DocumentId, body: Map<String, Value>) -> Self {
        Self { id, body }
    }

    /// Creates a document from a JSON value, which must be an object.
    pub fn from_value(id: DocumentId, value: Value) -> Result<Self> {
        match value {
            Value::Object(body) => Ok(Self::new(id, body)),
            other => Err(DocumentStoreError::Conversion(format!(
                "document {id} is {}, expected an object",
                json_type_name(&other)
            ))),
        }
    }

    /// Returns the nested object for `section`.
    ///
    /// A missing key or an explicit `null` yields `None`. Any other
    /// non-object value is reported as [`DocumentStoreError::MalformedSection`].
    pub fn section(&self, section: Section) -> Result<Option<&Map<String, Value>>> {
        match self.body.get(section.key()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(nested)) => Ok(Some(nested)),
            Some(other) => Err(DocumentStoreError::MalformedSection {
                id: self.id,
                section,
                found: json_type_name(other),
            }),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(body: Value) -> Document {
        Document::from_value(DocumentId::new(), body).unwrap()
    }

    #[test]
    fn section_keys() {
        assert_eq!(Section::FinalAssignment.key(), "final_assignment");
        assert_eq!(Section::FinalRelease.key(), "final_release");
        assert_eq!(Section::FinalRelease.to_string(), "final_release");
    }

    #[test]
    fn section_present() {
        let d = doc(json!({ "final_assignment": { "x": 1 } }));
        let nested = d.section(Section::FinalAssignment).unwrap().unwrap();
        assert_eq!(nested.get("x"), Some(&json!(1)));
    }

    #[test]
    fn section_missing_or_null_is_none() {
        let d = doc(json!({ "final_release": null }));
        assert!(d.section(Section::FinalAssignment).unwrap().is_none());
        assert!(d.section(Section::FinalRelease).unwrap().is_none());
    }

    #[test]
    fn section_wrong_type_is_malformed() {
        let d = doc(json!({ "final_assignment": [1, 2, 3] }));
        let err = d.section(Section::FinalAssignment).unwrap_err();
        match err {
            DocumentStoreError::MalformedSection { id, section, found } => {
                assert_eq!(id, d.id);
                assert_eq!(section, Section::FinalAssignment);
                assert_eq!(found, "an array");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_value_rejects_non_object() {
        let err = Document::from_value(DocumentId::new(), json!("nope")).unwrap_err();
        assert!(matches!(err, DocumentStoreError::Conversion(_)));
    }
}
