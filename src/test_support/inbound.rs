// AppState builders for inbound adapter tests.

use crate::modules::properties::controller::RollbackPolicy;
use crate::shell::state::AppState;
use crate::test_support::fixtures::{Harness, harness_with_policy, loaded_harness};
use std::sync::Arc;

pub fn state_from(harness: Harness) -> AppState {
    AppState {
        controller: Arc::new(harness.controller),
        credentials: harness.auth,
    }
}

/// Signed in, three listings loaded (r1 booked, r2 and r3 available).
pub async fn loaded_state() -> AppState {
    state_from(loaded_harness(RollbackPolicy::Rollback).await)
}

/// Signed in, empty store.
pub fn empty_state() -> AppState {
    state_from(harness_with_policy(RollbackPolicy::Rollback))
}
