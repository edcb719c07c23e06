// Update handler.
//
// Responsibilities
// - Validate locally, then apply the new fields to the local record before the remote call.
// - Still send the update when the id is unknown locally; the store may know it.
// - On failure under RollbackPolicy::Rollback, restore the previous record, unless something
//   else (a load, another edit, a sign out) has replaced the optimistic value in the meantime.

use crate::modules::properties::controller::{
    ControllerError, RecordListController, RollbackPolicy, WriteOperation,
};
use crate::modules::properties::core::ports::RecordStore;
use crate::modules::properties::core::record::Record;
use crate::modules::properties::core::validate::{RecordInput, validate};
use crate::shared::infrastructure::auth_gate::AuthGate;
use tracing::{debug, info, instrument, warn};

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: RecordInput) -> Result<(), ControllerError> {
        let fields = match validate(&input) {
            Ok(fields) => fields,
            Err(error) => return self.fail(error.into()).await,
        };
        self.require_session().await?;

        let (epoch, snapshot): (u64, Option<(Record, Record)>) = {
            let mut state = self.state.write().await;
            state.last_error = None;
            let snapshot = state.records.iter_mut().find(|r| r.id == id).map(|r| {
                let previous = r.clone();
                r.apply(&fields);
                (previous, r.clone())
            });
            (state.epoch, snapshot)
        };
        if snapshot.is_none() {
            debug!(id, "updating a record that is not in the local list");
        }

        match self.store.update(id, fields).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                if state.epoch == epoch {
                    state.last_synced_at = Some(self.now());
                }
                info!(id, "record updated");
                Ok(())
            }
            Err(source) => {
                if self.policy == RollbackPolicy::Rollback {
                    if let Some((previous, optimistic)) = snapshot {
                        let mut state = self.state.write().await;
                        if state.epoch != epoch {
                            debug!(id, "list cleared while updating, nothing to roll back");
                        } else if let Some(current) = state
                            .records
                            .iter_mut()
                            .find(|r| r.id == id && **r == optimistic)
                        {
                            *current = previous;
                            warn!(id, "rolled back optimistic update");
                        }
                    }
                }
                self.fail(ControllerError::RemoteWrite {
                    operation: WriteOperation::Update,
                    source,
                })
                .await
            }
        }
    }
}
