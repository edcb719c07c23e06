use crate::modules::properties::adapters::outbound::in_memory_record_store::InMemoryRecordStore;
use crate::modules::properties::controller::RecordListController;
use crate::shared::infrastructure::auth_gate::CredentialProvider;
use crate::shared::infrastructure::auth_gate::in_memory::InMemoryAuthGate;
use std::sync::Arc;

pub type PropertyController = RecordListController<InMemoryAuthGate, InMemoryRecordStore>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PropertyController>,
    pub credentials: Arc<dyn CredentialProvider>,
}
