// Shared test fixtures: a signed-in controller wired to in-memory collaborators.

use crate::modules::properties::adapters::outbound::in_memory_record_store::InMemoryRecordStore;
use crate::modules::properties::controller::{RecordListController, RollbackPolicy};
use crate::modules::properties::core::ports::RawDocument;
use crate::modules::properties::core::record::{PropertyStatus, Record};
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::auth_gate::Identity;
use crate::shared::infrastructure::auth_gate::in_memory::InMemoryAuthGate;
use rstest::fixture;
use serde_json::json;
use std::sync::Arc;

pub const NOW: i64 = 1_700_000_000_000;

pub type TestController = RecordListController<InMemoryAuthGate, InMemoryRecordStore>;

pub struct Harness {
    pub auth: Arc<InMemoryAuthGate>,
    pub store: Arc<InMemoryRecordStore>,
    pub clock: Arc<FixedClock>,
    pub controller: TestController,
}

pub fn identity() -> Identity {
    Identity {
        user_id: "user-fixed-0001".into(),
        email: "host@example.com".into(),
    }
}

pub fn harness_with_policy(policy: RollbackPolicy) -> Harness {
    let auth = Arc::new(InMemoryAuthGate::with_session(identity()));
    let store = Arc::new(InMemoryRecordStore::new());
    let clock = Arc::new(FixedClock::new(NOW));
    let controller = RecordListController::new(auth.clone(), store.clone())
        .with_clock(clock.clone())
        .with_rollback_policy(policy);
    Harness {
        auth,
        store,
        clock,
        controller,
    }
}

#[fixture]
pub fn harness() -> Harness {
    harness_with_policy(RollbackPolicy::Rollback)
}

pub fn record(id: &str, name: &str, price: f64, status: PropertyStatus) -> Record {
    Record {
        id: id.into(),
        name: name.into(),
        price_per_night: price,
        status,
        created_at: None,
    }
}

pub fn listing(id: &str, name: &str, price: f64, status: &str) -> RawDocument {
    RawDocument::new(
        id,
        json!({
            "name": name,
            "pricePerNight": price,
            "status": status,
            "createdAt": NOW
        }),
    )
}

/// Store seeded with three listings and a controller that has loaded them.
pub async fn loaded_harness(policy: RollbackPolicy) -> Harness {
    let harness = harness_with_policy(policy);
    harness
        .store
        .seed(vec![
            listing("r1", "Lakeview Villa", 180.0, "Booked"),
            listing("r2", "Downtown Loft", 95.0, "Available"),
            listing("r3", "Lake Cabin", 60.0, "Available"),
        ])
        .await;
    harness
        .controller
        .load()
        .await
        .expect("initial load failed");
    harness
}
