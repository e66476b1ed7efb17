// ============================================================================
// SESSION STATE - Observable session owned by the root AppState
// ============================================================================
// Tokens live in persistent storage; "logged in" means an access token is
// stored. Components hold an Rc<SessionState> and subscribe to signals
// instead of listening for window events.
// ============================================================================

use std::rc::Rc;

use super::reactivity::{Notifier, SubscriptionId};
use crate::models::TokenPair;
use crate::utils::{KeyValueStore, StorageError, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Session change notification. Carries no payload beyond its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSignal {
    LoginSucceeded,
    LogoutSucceeded,
    /// Storage was changed elsewhere (another tab)
    StorageChanged,
}

impl SessionSignal {
    /// Event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SessionSignal::LoginSucceeded => "loginSuccess",
            SessionSignal::LogoutSucceeded => "logoutSuccess",
            SessionSignal::StorageChanged => "storage",
        }
    }
}

/// Keys whose cross-tab changes affect the session. `None` is a `clear()`.
pub fn is_session_key(key: Option<&str>) -> bool {
    match key {
        Some(key) => key == ACCESS_TOKEN_KEY || key == REFRESH_TOKEN_KEY,
        None => true,
    }
}

pub struct SessionState {
    storage: Rc<dyn KeyValueStore>,
    signals: Notifier<SessionSignal>,
}

impl SessionState {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            signals: Notifier::new(),
        }
    }

    /// Stored access token, ignoring blanks
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Stored refresh token, ignoring blanks
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Synchronous snapshot read from storage
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Persist both tokens, then publish `LoginSucceeded`.
    /// Either both tokens are stored or neither is.
    pub fn login(&self, tokens: &TokenPair) -> Result<(), StorageError> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        if let Err(e) = self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh) {
            if let Err(cleanup) = self.storage.remove(ACCESS_TOKEN_KEY) {
                log::warn!("⚠️ [SESSION] Could not roll back {}: {}", ACCESS_TOKEN_KEY, cleanup);
            }
            return Err(e);
        }
        log::info!("🔐 [SESSION] Tokens stored");
        self.publish(SessionSignal::LoginSucceeded);
        Ok(())
    }

    /// Clear both tokens, then publish `LogoutSucceeded`
    pub fn logout(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("⚠️ [SESSION] Could not clear {}: {}", key, e);
            }
        }
        log::info!("👋 [SESSION] Tokens cleared");
        self.publish(SessionSignal::LogoutSucceeded);
    }

    /// Deliver `signal` to every current subscriber
    pub fn publish(&self, signal: SessionSignal) {
        log::debug!("📣 [SESSION] {}", signal.name());
        self.signals.publish(&signal);
    }

    /// Every signal
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(SessionSignal) + 'static,
    {
        self.signals.subscribe(move |signal| callback(*signal))
    }

    /// Only `signal`
    pub fn subscribe_to<F>(&self, signal: SessionSignal, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.signals.subscribe(move |received| {
            if *received == signal {
                callback();
            }
        })
    }

    /// Returns false for an unknown id
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.signals.unsubscribe(id)
    }
}
