// Sign out: end the session once, then drop everything held locally.

use crate::modules::properties::controller::{ControllerError, RecordListController};
use crate::modules::properties::core::ports::RecordStore;
use crate::shared::infrastructure::auth_gate::AuthGate;
use tracing::{info, instrument};

impl<TAuthGate, TRecordStore> RecordListController<TAuthGate, TRecordStore>
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), ControllerError> {
        if let Err(error) = self.auth.sign_out().await {
            return self.fail(ControllerError::Session(error)).await;
        }
        self.clear().await;
        info!("signed out, local records cleared");
        Ok(())
    }
}
