// In memory implementation of the RecordStore port.
//
// Purpose
// - Stand in for the hosted document store in tests and local development.
//
// Responsibilities
// - Keep documents as raw JSON maps, the way the remote store hands them back.
// - Assign identifiers on insert (queued ids first, then UUID v7).
// - Record every call so tests can assert what reached the store.
// - Simulate an outage and network latency on demand.

use crate::modules::properties::core::ports::{RawDocument, RecordStore, RecordStoreError};
use crate::modules::properties::core::record::RecordFields;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    ListAll,
    Insert(RecordFields),
    Update(String, RecordFields),
    Delete(String),
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    documents: RwLock<Vec<RawDocument>>,
    calls: Mutex<Vec<StoreCall>>,
    queued_ids: Mutex<VecDeque<String>>,
    is_offline: AtomicBool,
    delay_ms: AtomicU64,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Identifiers handed out by the next inserts, in order.
    pub async fn queue_ids<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queued_ids
            .lock()
            .await
            .extend(ids.into_iter().map(Into::into));
    }

    /// Puts documents in place without going through insert, malformed ones included.
    pub async fn seed(&self, documents: Vec<RawDocument>) {
        self.documents.write().await.extend(documents);
    }

    pub async fn documents(&self) -> Vec<RawDocument> {
        self.documents.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().await.clone()
    }

    async fn record_call(&self, call: StoreCall) {
        self.calls.lock().await.push(call);
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RecordStoreError::Unavailable("Record store offline".into()));
        }
        Ok(())
    }

    fn current_delay(&self) -> Option<Duration> {
        match self.delay_ms.load(Ordering::SeqCst) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    async fn latency(&self, delay: Option<Duration>) {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    async fn next_id(&self) -> String {
        self.queued_ids
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Uuid::now_v7().to_string())
    }
}

fn to_map(fields: &RecordFields) -> Result<Map<String, Value>, RecordStoreError> {
    match serde_json::to_value(fields) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RecordStoreError::Backend("fields are not an object".into())),
        Err(e) => Err(RecordStoreError::Backend(e.to_string())),
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_all(&self) -> Result<Vec<RawDocument>, RecordStoreError> {
        self.record_call(StoreCall::ListAll).await;
        let delay = self.current_delay();
        let offline = self.ensure_online();
        // Snapshot at request time, answer after the latency.
        let snapshot = self.documents.read().await.clone();
        self.latency(delay).await;
        offline.map(|_| snapshot)
    }

    async fn insert(&self, fields: RecordFields) -> Result<String, RecordStoreError> {
        self.record_call(StoreCall::Insert(fields.clone())).await;
        self.latency(self.current_delay()).await;
        self.ensure_online()?;
        let map = to_map(&fields)?;
        let id = self.next_id().await;
        self.documents.write().await.push(RawDocument {
            id: id.clone(),
            fields: map,
        });
        Ok(id)
    }

    async fn update(&self, id: &str, fields: RecordFields) -> Result<(), RecordStoreError> {
        self.record_call(StoreCall::Update(id.to_string(), fields.clone()))
            .await;
        self.latency(self.current_delay()).await;
        self.ensure_online()?;
        let map = to_map(&fields)?;
        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RecordStoreError::NotFound(id.to_string()))?;
        document.fields.extend(map);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RecordStoreError> {
        self.record_call(StoreCall::Delete(id.to_string())).await;
        self.latency(self.current_delay()).await;
        self.ensure_online()?;
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        if documents.len() == before {
            return Err(RecordStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
