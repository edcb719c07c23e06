// Composition root for the properties dashboard.
//
// Responsibilities
// - Read config from the environment (config.rs).
// - Instantiate the in-memory auth gate and record store.
// - Wire them into the controller and expose both through AppState.
// - Spawn background workers (session sync).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;

use crate::modules::properties::adapters::outbound::in_memory_record_store::InMemoryRecordStore;
use crate::modules::properties::controller::RecordListController;
use crate::modules::properties::core::ports::RawDocument;
use crate::shared::infrastructure::auth_gate::in_memory::InMemoryAuthGate;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use serde_json::json;
use std::sync::Arc;

fn demo_listings(now: i64) -> Vec<RawDocument> {
    [
        ("Lakeview Villa", 180.0, "Booked"),
        ("Downtown Loft", 95.0, "Available"),
        ("Lake Cabin", 60.0, "Available"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, price, status))| {
        RawDocument::new(
            format!("demo-{}", i + 1),
            json!({
                "name": name,
                "pricePerNight": price,
                "status": status,
                "createdAt": now + i as i64,
            }),
        )
    })
    .collect()
}

pub async fn compose(config: &AppConfig) -> AppState {
    let auth = Arc::new(InMemoryAuthGate::new());
    let store = Arc::new(InMemoryRecordStore::new());
    store.set_delay_ms(config.store_latency_ms);

    let controller = RecordListController::new(auth.clone(), store.clone())
        .with_rollback_policy(config.rollback_policy);

    if config.seed_demo {
        store.seed(demo_listings(controller.now())).await;
        tracing::info!("seeded demo listings");
    }

    AppState {
        controller: Arc::new(controller),
        credentials: auth,
    }
}

#[cfg(test)]
mod composition_tests {
    use super::*;
    use crate::modules::properties::controller::RollbackPolicy;
    use crate::shared::infrastructure::auth_gate::AuthGate;

    fn config(seed_demo: bool) -> AppConfig {
        AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            rollback_policy: RollbackPolicy::KeepOptimistic,
            seed_demo,
            store_latency_ms: 0,
        }
    }

    #[tokio::test]
    async fn it_should_start_signed_out_with_the_configured_policy() {
        let state = compose(&config(false)).await;
        assert!(!state.controller.auth_gate().current_session().is_authenticated());
        assert_eq!(state.controller.rollback_policy(), RollbackPolicy::KeepOptimistic);
        assert!(state.controller.store.documents().await.is_empty());
    }

    #[tokio::test]
    async fn it_should_seed_demo_listings_when_asked() {
        let state = compose(&config(true)).await;
        assert_eq!(state.controller.store.documents().await.len(), 3);
    }
}
