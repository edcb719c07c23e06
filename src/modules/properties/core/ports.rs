// Ports define what the record list core needs from the document store, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement RecordStore.
// - Documents come back raw and untrusted; decoding is the core's job (see decode.rs).

use crate::modules::properties::core::record::RecordFields;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Unordered fetch of the whole collection.
    async fn list_all(&self) -> Result<Vec<RawDocument>, RecordStoreError>;

    /// Returns the store-assigned identifier.
    async fn insert(&self, fields: RecordFields) -> Result<String, RecordStoreError>;

    /// Fails with NotFound if the document does not exist remotely.
    async fn update(&self, id: &str, fields: RecordFields) -> Result<(), RecordStoreError>;

    async fn delete(&self, id: &str) -> Result<(), RecordStoreError>;
}
