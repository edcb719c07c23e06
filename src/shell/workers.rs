// Background workers spawned by the composition root.
//
// Session sync
// - Mirrors AuthGate transitions onto the controller: sign in loads, sign out clears.
// - Auth callbacks are synchronous, so they only enqueue the session. The task does the async work.
// - The task ends once the subscription is dropped through AuthGate::unsubscribe.

use crate::modules::properties::controller::RecordListController;
use crate::modules::properties::core::ports::RecordStore;
use crate::modules::properties::use_cases::load_records::handler::LoadOutcome;
use crate::shared::infrastructure::auth_gate::{AuthGate, Session, SubscriptionId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub fn spawn_session_sync<TAuthGate, TRecordStore>(
    controller: Arc<RecordListController<TAuthGate, TRecordStore>>,
) -> (SubscriptionId, JoinHandle<()>)
where
    TAuthGate: AuthGate + 'static,
    TRecordStore: RecordStore + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Session>();

    let callback_tx = tx.clone();
    let subscription = controller
        .auth_gate()
        .on_session_change(Box::new(move |session: &Session| {
            // Receiver gone means the worker already stopped.
            let _ = callback_tx.send(session.clone());
        }));

    // Subscribe first, then replay the current session, so no transition is missed.
    let _ = tx.send(controller.auth_gate().current_session());
    drop(tx);

    let handle = tokio::spawn(async move {
        while let Some(session) = rx.recv().await {
            if session.is_loading {
                continue;
            }
            match session.identity {
                Some(identity) => {
                    tracing::info!(user_id = %identity.user_id, "session started, loading records");
                    match controller.load().await {
                        Ok(LoadOutcome::Applied { count }) => {
                            tracing::debug!(count, "session load applied");
                        }
                        Ok(LoadOutcome::Stale) => {}
                        // Already recorded as last_error by the controller.
                        Err(_) => {}
                    }
                }
                None => {
                    tracing::info!("session ended, clearing records");
                    controller.clear().await;
                }
            }
        }
        tracing::debug!("session sync worker stopped");
    });

    (subscription, handle)
}
