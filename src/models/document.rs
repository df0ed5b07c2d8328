use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document record as returned by the storage provider.
///
/// The record is owned by the storage provider and passed through untouched:
/// only `slug` is read, and every field (including `updateDate`, whatever
/// its format) lands on the view-model exactly as it was stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Build a document with just a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug: String = slug.into();
        Self::default().with_field("slug", slug)
    }

    /// Attach a field, replacing any previous value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The URL-safe slug (e.g., `engineering/deployment-guide`), if the record has one.
    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").and_then(Value::as_str)
    }

    /// The raw `updateDate`, as stored.
    pub fn update_date(&self) -> Option<&Value> {
        self.fields.get("updateDate")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.fields)
    }
}
