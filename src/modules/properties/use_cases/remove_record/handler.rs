// Two-step removal: request, then confirm or cancel.
//
// Responsibilities
// - request_remove only marks intent. Nothing is removed and the store is not called.
// - confirm_remove removes the record locally, then deletes it remotely.
// - A "not found" from the store counts as success.
// - The pending id and the deleting marker are cleared whatever the outcome.
// - On failure under RollbackPolicy::Rollback the record goes back to its original position,
//   unless the list was cleared while the delete was pending.

use crate::modules::properties::controller::{
    ControllerError, RecordListController, RollbackPolicy, WriteOperation,
};
use crate::modules::properties::core::ports::{RecordStore, RecordStoreError};
use crate::shared::infrastructure::auth_gate::AuthGate;
use tracing::{debug, info, instrument, warn};

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    pub async fn request_remove(&self, id: impl Into<String>) {
        let id = id.into();
        debug!(id = %id, "delete requested");
        self.state.write().await.pending_delete_id = Some(id);
    }

    pub async fn cancel_remove(&self) {
        self.state.write().await.pending_delete_id = None;
    }

    /// Returns the id that was removed, or None when no removal was pending.
    #[instrument(skip(self))]
    pub async fn confirm_remove(&self) -> Result<Option<String>, ControllerError> {
        let pending = self.state.write().await.pending_delete_id.take();
        let Some(id) = pending else {
            debug!("confirm without a pending delete");
            return Ok(None);
        };
        self.require_session().await?;

        let (epoch, removed) = {
            let mut state = self.state.write().await;
            state.last_error = None;
            state.deleting.insert(id.clone());
            let position = state.records.iter().position(|r| r.id == id);
            let removed = position.map(|index| (index, state.records.remove(index)));
            (state.epoch, removed)
        };

        let result = match self.store.delete(&id).await {
            Ok(()) | Err(RecordStoreError::NotFound(_)) => Ok(()),
            Err(source) => Err(source),
        };

        let mut state = self.state.write().await;
        state.deleting.remove(&id);
        let cleared = state.epoch != epoch;
        match result {
            Ok(()) => {
                if !cleared {
                    state.last_synced_at = Some(self.now());
                }
                info!(id = %id, "record deleted");
                Ok(Some(id))
            }
            Err(source) => {
                if cleared {
                    debug!(id = %id, "list cleared while deleting, not restoring");
                } else if self.policy == RollbackPolicy::Rollback {
                    if let Some((index, record)) = removed {
                        if !state.records.iter().any(|r| r.id == record.id) {
                            let index = index.min(state.records.len());
                            state.records.insert(index, record);
                            warn!(id = %id, index, "restored record after failed delete");
                        }
                    }
                }
                drop(state);
                self.fail(ControllerError::RemoteWrite {
                    operation: WriteOperation::Delete,
                    source,
                })
                .await
            }
        }
    }
}
