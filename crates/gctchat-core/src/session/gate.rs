//! Two-state session gate.
//!
//! Starts `Unidentified`; moves to `Identified` once, either because a valid
//! username was found in storage or because the user submitted one. There is
//! no way back within a process.

use gctchat_types::error::UsernameError;
use gctchat_types::identity::Username;
use gctchat_types::session::SessionState;
use tracing::info;

use crate::identity::UsernamePersistence;
use crate::storage::KvStore;

/// Guards every message operation on a username being present.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup transition: Identified if storage holds a valid username.
    pub fn restore<S: KvStore>(persistence: &UsernamePersistence<S>) -> Self {
        let mut gate = Self::new();
        if let Some(username) = persistence.load() {
            gate.identify(username);
        }
        gate
    }

    /// Open the gate for `username`.
    ///
    /// Returns `false` and changes nothing if the gate is already open.
    pub fn identify(&mut self, username: Username) -> bool {
        if self.state.is_identified() {
            return false;
        }
        info!(%username, "session identified");
        self.state = SessionState::Identified(username);
        true
    }

    /// Submission transition: persist `candidate` and open the gate with it.
    ///
    /// An already-open gate is left alone and its current username returned;
    /// nothing is written in that case.
    pub fn submit<S: KvStore>(
        &mut self,
        persistence: &mut UsernamePersistence<S>,
        candidate: &str,
    ) -> Result<Username, UsernameError> {
        if let Some(current) = self.state.username() {
            return Ok(current.clone());
        }
        let username = persistence.store(candidate)?;
        self.identify(username.clone());
        Ok(username)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn username(&self) -> Option<&Username> {
        self.state.username()
    }

    pub fn is_identified(&self) -> bool {
        self.state.is_identified()
    }
}
