// Load handler: replace the local list with the store's full collection.
//
// Responsibilities
// - Gate on an authenticated session.
// - Tag each call with a generation so only the latest issued load may write state.
// - Decode documents defensively and drop duplicate ids.
// - Leave the list untouched on failure and record the error.

use crate::modules::properties::controller::{ControllerError, RecordListController};
use crate::modules::properties::core::decode::decode_document;
use crate::modules::properties::core::ports::RecordStore;
use crate::shared::infrastructure::auth_gate::AuthGate;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    /// A newer load was issued while this one was in flight.
    Stale,
}

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<LoadOutcome, ControllerError> {
        self.require_session().await?;

        let generation = {
            let mut state = self.state.write().await;
            state.load_generation += 1;
            state.is_loading = true;
            state.last_error = None;
            state.load_generation
        };

        let result = self.store.list_all().await;

        let mut state = self.state.write().await;
        if generation != state.load_generation {
            debug!(generation, latest = state.load_generation, "discarding stale load");
            return Ok(LoadOutcome::Stale);
        }
        state.is_loading = false;

        match result {
            Ok(documents) => {
                let mut seen = HashSet::new();
                let records: Vec<_> = documents
                    .into_iter()
                    .map(decode_document)
                    .filter(|r| seen.insert(r.id.clone()))
                    .collect();
                let count = records.len();
                state.records = records;
                state.last_synced_at = Some(self.now());
                info!(count, "records loaded");
                Ok(LoadOutcome::Applied { count })
            }
            Err(source) => {
                drop(state);
                self.fail(ControllerError::RemoteRead(source)).await
            }
        }
    }
}
