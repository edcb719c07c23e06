// In memory implementation of the AuthGate and CredentialProvider ports.
//
// Purpose
// - Support controller tests and local development without a hosted auth provider.
//
// Responsibilities
// - Keep accounts in a map keyed by email.
// - Cache the current session and notify subscribers on identity transitions.

use crate::shared::infrastructure::auth_gate::{
    AuthError, AuthGate, CredentialProvider, Identity, Session, SessionCallback, SubscriptionId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tokio::sync::Mutex;
use uuid::Uuid;

pub const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    identity: Identity,
    password: String,
}

#[derive(Default)]
pub struct InMemoryAuthGate {
    accounts: Mutex<HashMap<String, Account>>,
    session: RwLock<Session>,
    subscribers: RwLock<Vec<(SubscriptionId, SessionCallback)>>,
    next_subscription: AtomicU64,
    is_offline: AtomicBool,
}

impl InMemoryAuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already resolved session, as if the provider restored it from storage.
    pub fn with_session(identity: Identity) -> Self {
        let gate = Self::new();
        gate.replace_session(Session::signed_in(identity));
        gate
    }

    pub fn sign_in_as(&self, identity: Identity) {
        self.replace_session(Session::signed_in(identity));
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), AuthError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(AuthError::Backend("auth service offline".into()));
        }
        Ok(())
    }

    fn replace_session(&self, next: Session) {
        let changed = {
            let mut guard = self.session.write().unwrap_or_else(PoisonError::into_inner);
            let changed = guard.identity != next.identity;
            *guard = next.clone();
            changed
        };
        if changed {
            let subscribers = self
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            for (_, callback) in subscribers.iter() {
                callback(&next);
            }
        }
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthError::InvalidEmail),
    }
}

#[async_trait::async_trait]
impl AuthGate for InMemoryAuthGate {
    fn current_session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_session_change(&self, callback: SessionCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        id
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(id, _)| *id != subscription);
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.ensure_online()?;
        self.replace_session(Session::signed_out());
        Ok(())
    }
}

#[async_trait::async_trait]
impl CredentialProvider for InMemoryAuthGate {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.ensure_online()?;
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }
        let identity = {
            let mut accounts = self.accounts.lock().await;
            if accounts.contains_key(&email) {
                return Err(AuthError::EmailInUse);
            }
            let identity = Identity {
                user_id: Uuid::now_v7().to_string(),
                email: email.clone(),
            };
            accounts.insert(
                email,
                Account {
                    identity: identity.clone(),
                    password: password.to_string(),
                },
            );
            identity
        };
        self.replace_session(Session::signed_in(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.ensure_online()?;
        let email = normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;
        let identity = {
            let accounts = self.accounts.lock().await;
            match accounts.get(&email) {
                Some(account) if account.password == password => account.identity.clone(),
                _ => return Err(AuthError::InvalidCredentials),
            }
        };
        self.replace_session(Session::signed_in(identity.clone()));
        Ok(identity)
    }
}
