// Remote-backed record list controller.
//
// Responsibilities
// - Own the in-memory list of records and the transient dashboard state around it.
// - Hold the AuthGate and RecordStore it mediates, injected at construction.
// - Expose read accessors and derived views. The mutating operations live in use_cases/.
//
// Concurrency
// - Local state sits behind one lock. No lock is held across a remote call, so every local
//   mutation is atomic and reads during a pending remote call see a consistent list.

use crate::modules::properties::core::ports::{RecordStore, RecordStoreError};
use crate::modules::properties::core::record::Record;
use crate::modules::properties::core::validate::ValidationError;
use crate::modules::properties::core::views::{self, Counts, SortKey, SortOrder};
use crate::shared::core::clock::{Clock, SystemClock};
use crate::shared::infrastructure::auth_gate::{AuthError, AuthGate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// What happens to an optimistic update or removal when the remote write fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollbackPolicy {
    /// Restore the pre-mutation record.
    #[default]
    Rollback,
    /// Leave the optimistic state in place and only surface the error.
    KeepOptimistic,
}

impl FromStr for RollbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rollback" => Ok(RollbackPolicy::Rollback),
            "keep-optimistic" | "keep_optimistic" => Ok(RollbackPolicy::KeepOptimistic),
            other => Err(format!("unknown rollback policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteOperation::Create => "create",
            WriteOperation::Update => "update",
            WriteOperation::Delete => "delete",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not load properties: {0}")]
    RemoteRead(RecordStoreError),

    #[error("could not {operation} property: {source}")]
    RemoteWrite {
        operation: WriteOperation,
        source: RecordStoreError,
    },

    #[error("not signed in")]
    Unauthenticated,

    #[error("session error: {0}")]
    Session(AuthError),
}

#[derive(Debug, Default)]
pub(crate) struct ControllerState {
    pub(crate) records: Vec<Record>,
    pub(crate) is_loading: bool,
    pub(crate) last_error: Option<ControllerError>,
    pub(crate) last_synced_at: Option<i64>,
    pub(crate) pending_delete_id: Option<String>,
    pub(crate) deleting: BTreeSet<String>,
    pub(crate) search: String,
    pub(crate) sort: SortOrder,
    pub(crate) load_generation: u64,
    /// Bumped by clear(). Writes that resolve under an older epoch leave the list alone.
    pub(crate) epoch: u64,
}

impl ControllerState {
    pub(crate) fn visible(&self) -> Vec<Record> {
        views::sorted_by(views::filtered_by(&self.records, &self.search), self.sort)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Everything a dashboard needs to render, read under one lock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    pub records: Vec<Record>,
    pub visible: Vec<Record>,
    pub counts: Counts,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub last_synced_at: Option<i64>,
    pub pending_delete_id: Option<String>,
    pub deleting: Vec<String>,
    pub search: String,
    pub sort: SortOrder,
}

pub struct RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    pub(crate) auth: Arc<TAuthGate>,
    pub(crate) store: Arc<TRecordStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) policy: RollbackPolicy,
    pub(crate) state: RwLock<ControllerState>,
}

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    pub fn new(auth: Arc<TAuthGate>, store: Arc<TRecordStore>) -> Self {
        Self {
            auth,
            store,
            clock: Arc::new(SystemClock),
            policy: RollbackPolicy::default(),
            state: RwLock::new(ControllerState::default()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_rollback_policy(mut self, policy: RollbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn rollback_policy(&self) -> RollbackPolicy {
        self.policy
    }

    pub fn auth_gate(&self) -> &Arc<TAuthGate> {
        &self.auth
    }

    pub async fn records(&self) -> Vec<Record> {
        self.state.read().await.records.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub async fn last_error(&self) -> Option<ControllerError> {
        self.state.read().await.last_error.clone()
    }

    pub async fn last_synced_at(&self) -> Option<i64> {
        self.state.read().await.last_synced_at
    }

    pub async fn pending_delete_id(&self) -> Option<String> {
        self.state.read().await.pending_delete_id.clone()
    }

    pub async fn is_deleting(&self, id: &str) -> bool {
        self.state.read().await.deleting.contains(id)
    }

    pub async fn counts(&self) -> Counts {
        views::counts(&self.state.read().await.records)
    }

    pub async fn filtered_by(&self, query: &str) -> Vec<Record> {
        let state = self.state.read().await;
        views::filtered_by(&state.records, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn sorted_by(&self, key: SortKey, ascending: bool) -> Vec<Record> {
        let state = self.state.read().await;
        let all = views::filtered_by(&state.records, "");
        views::sorted_by(all, SortOrder { key, ascending })
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn set_search(&self, query: impl Into<String>) {
        self.state.write().await.search = query.into();
    }

    pub async fn set_sort(&self, order: SortOrder) {
        self.state.write().await.sort = order;
    }

    /// Records after the current search and sort settings.
    pub async fn visible_records(&self) -> Vec<Record> {
        self.state.read().await.visible()
    }

    pub async fn snapshot(&self) -> ControllerSnapshot {
        let state = self.state.read().await;
        ControllerSnapshot {
            records: state.records.clone(),
            visible: state.visible(),
            counts: views::counts(&state.records),
            is_loading: state.is_loading,
            last_error: state.last_error.as_ref().map(ToString::to_string),
            last_synced_at: state.last_synced_at,
            pending_delete_id: state.pending_delete_id.clone(),
            deleting: state.deleting.iter().cloned().collect(),
            search: state.search.clone(),
            sort: state.sort,
        }
    }

    /// Drops all local state. In-flight loads and writes are invalidated so they cannot
    /// repopulate it.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        let (load_generation, epoch) = (state.load_generation + 1, state.epoch + 1);
        *state = ControllerState {
            load_generation,
            epoch,
            ..ControllerState::default()
        };
    }

    pub(crate) fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    pub(crate) async fn fail<T>(&self, error: ControllerError) -> Result<T, ControllerError> {
        tracing::warn!(error = %error, "record list operation failed");
        self.state.write().await.last_error = Some(error.clone());
        Err(error)
    }

    pub(crate) async fn require_session(&self) -> Result<(), ControllerError> {
        if self.auth.current_session().is_authenticated() {
            Ok(())
        } else {
            self.fail(ControllerError::Unauthenticated).await
        }
    }
}

#[cfg(test)]
mod record_list_controller_tests {
    use super::*;
    use crate::modules::properties::core::record::PropertyStatus;
    use crate::test_support::fixtures::{Harness, harness, record};
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_rollback_policy() {
        assert_eq!("rollback".parse::<RollbackPolicy>(), Ok(RollbackPolicy::Rollback));
        assert_eq!(
            "Keep-Optimistic".parse::<RollbackPolicy>(),
            Ok(RollbackPolicy::KeepOptimistic)
        );
        assert!("sometimes".parse::<RollbackPolicy>().is_err());
    }

    #[rstest]
    fn it_should_describe_errors_for_the_user() {
        let error = ControllerError::RemoteWrite {
            operation: WriteOperation::Delete,
            source: RecordStoreError::Unavailable("Record store offline".into()),
        };
        assert_eq!(
            error.to_string(),
            "could not delete property: store unavailable: Record store offline"
        );
        assert_eq!(
            ControllerError::from(ValidationError::NameRequired).to_string(),
            "name required"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty(harness: Harness) {
        let snapshot = harness.controller.snapshot().await;
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.counts, Counts::default());
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.last_error, None);
        assert_eq!(snapshot.last_synced_at, None);
        assert_eq!(harness.controller.rollback_policy(), RollbackPolicy::Rollback);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_search_and_sort_to_visible_records(harness: Harness) {
        let controller = &harness.controller;
        {
            let mut state = controller.state.write().await;
            state.records = vec![
                record("r1", "Lakeview Villa", 180.0, PropertyStatus::Booked),
                record("r2", "Downtown Loft", 95.0, PropertyStatus::Available),
                record("r3", "Lake Cabin", 60.0, PropertyStatus::Available),
            ];
        }
        controller.set_search("lake").await;
        controller
            .set_sort(SortOrder {
                key: SortKey::PricePerNight,
                ascending: true,
            })
            .await;

        let visible: Vec<String> = controller
            .visible_records()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(visible, vec!["r3", "r1"]);
        assert_eq!(controller.records().await.len(), 3);
        assert_eq!(controller.counts().await.total, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_everything_and_invalidate_loads(harness: Harness) {
        let controller = &harness.controller;
        {
            let mut state = controller.state.write().await;
            state.records = vec![record("r1", "Lakeview", 1.0, PropertyStatus::Available)];
            state.pending_delete_id = Some("r1".into());
            state.search = "lake".into();
            state.load_generation = 4;
            state.epoch = 2;
        }
        controller.clear().await;
        let state = controller.state.read().await;
        assert!(state.records.is_empty());
        assert_eq!(state.pending_delete_id, None);
        assert!(state.search.is_empty());
        assert_eq!(state.load_generation, 5);
        assert_eq!(state.epoch, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_without_a_session(harness: Harness) {
        harness.auth.sign_out().await.unwrap();
        let result = harness.controller.require_session().await;
        assert_eq!(result, Err(ControllerError::Unauthenticated));
        assert_eq!(
            harness.controller.last_error().await,
            Some(ControllerError::Unauthenticated)
        );
    }
}
