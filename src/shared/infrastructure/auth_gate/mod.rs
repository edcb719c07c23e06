// Ports for the hosted authentication provider.
//
// Purpose
// - AuthGate: what the record list core needs (current session, transitions, sign out).
// - CredentialProvider: what the login and signup screen needs (sign up, sign in).
//
// Boundaries
// - No concrete provider here. Adapters implement these traits.

pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

/// Cached session state. `is_loading` is true until the provider resolved its first state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub identity: Option<Identity>,
    pub is_loading: bool,
}

impl Session {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            is_loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already in use")]
    EmailInUse,

    #[error("password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("auth backend error: {0}")]
    Backend(String),
}

pub type SessionCallback = Box<dyn Fn(&Session) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

#[async_trait]
pub trait AuthGate: Send + Sync {
    /// Synchronous read of the cached session.
    fn current_session(&self) -> Session;

    /// Registers a callback fired on every signed-in <-> signed-out transition.
    /// Callbacks must not register further callbacks from inside the call.
    fn on_session_change(&self, callback: SessionCallback) -> SubscriptionId;

    fn unsubscribe(&self, subscription: SubscriptionId);

    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}
