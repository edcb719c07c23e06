// Create handler.
//
// Responsibilities
// - Validate locally before anything reaches the store.
// - Insert with a creation timestamp, then append the record under the id the store returned.
// - No optimistic insert: a record without an id cannot be edited or deleted later.
// - A list cleared while the insert was pending stays cleared.

use crate::modules::properties::controller::{
    ControllerError, RecordListController, WriteOperation,
};
use crate::modules::properties::core::ports::RecordStore;
use crate::modules::properties::core::record::Record;
use crate::modules::properties::core::validate::{RecordInput, validate};
use crate::shared::infrastructure::auth_gate::AuthGate;
use tracing::{debug, info, instrument};

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: RecordInput) -> Result<Record, ControllerError> {
        let mut fields = match validate(&input) {
            Ok(fields) => fields,
            Err(error) => return self.fail(error.into()).await,
        };
        self.require_session().await?;
        fields.created_at = Some(self.now());
        let epoch = {
            let mut state = self.state.write().await;
            state.last_error = None;
            state.epoch
        };

        let id = match self.store.insert(fields.clone()).await {
            Ok(id) => id,
            Err(source) => {
                return self
                    .fail(ControllerError::RemoteWrite {
                        operation: WriteOperation::Create,
                        source,
                    })
                    .await;
            }
        };

        let record = Record::from_fields(id, fields);
        let mut state = self.state.write().await;
        if state.epoch != epoch {
            debug!(id = %record.id, "list cleared while inserting, not appending");
            return Ok(record);
        }
        // A load that resolved meanwhile may already carry the new document.
        match state.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => state.records.push(record.clone()),
        }
        state.last_synced_at = Some(self.now());
        info!(id = %record.id, "record created");
        Ok(record)
    }
}
