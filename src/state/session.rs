//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` restores one `SessionState` at startup and provides it as an
//! `RwSignal` context. Sign-in and sign-out handlers are the only writers;
//! the route guard and API calls read it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::config::SESSION_STORAGE_KEY;
use crate::util::storage;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub token: Option<String>,
}

impl SessionState {
    /// Load the persisted session, falling back to signed-out.
    pub fn restore() -> Self {
        storage::load_json::<Self>(SESSION_STORAGE_KEY)
            .map(Self::normalized)
            .unwrap_or_default()
    }

    /// A stored record claiming a session without a token is stale.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self.token {
            Some(token) if self.is_authenticated && !token.is_empty() => Self {
                is_authenticated: true,
                token: Some(token),
            },
            _ => Self::default(),
        }
    }

    /// Start a session. An empty token is ignored; `normalized` would drop it.
    pub fn login(&mut self, token: String) {
        if token.is_empty() {
            log::warn!("ignoring sign-in with an empty token");
            return;
        }
        self.is_authenticated = true;
        self.token = Some(token);
        log::info!("session started");
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.token = None;
        log::info!("session ended");
    }

    /// Write the current state to localStorage, or clear it when signed out.
    pub fn persist(&self) {
        if self.is_authenticated {
            storage::save_json(SESSION_STORAGE_KEY, self);
        } else {
            storage::remove(SESSION_STORAGE_KEY);
        }
    }
}
