//! `ChatShell` wires persistence, gate, draft buffers and transcript together
//! for one session and publishes every observable change on the event bus.
//!
//! All operations are synchronous and complete inside the triggering UI event.

use gctchat_types::chat::ChatMessage;
use gctchat_types::error::UsernameError;
use gctchat_types::event::ShellEvent;
use gctchat_types::identity::Username;
use tracing::warn;

use super::input::InputBuffer;
use super::log::MessageLog;
use crate::event::EventBus;
use crate::identity::UsernamePersistence;
use crate::session::SessionGate;
use crate::storage::KvStore;

/// Placeholder of the compose field once a username is set.
pub const COMPOSE_PLACEHOLDER: &str = "Type a message...";
/// Placeholder of the compose field while the gate is closed.
pub const GATED_PLACEHOLDER: &str = "Enter username first";

/// One chat session: the single writer of all session state.
pub struct ChatShell<S: KvStore> {
    persistence: UsernamePersistence<S>,
    gate: SessionGate,
    log: MessageLog,
    draft: InputBuffer,
    username_draft: String,
    username_error: Option<String>,
    events: EventBus,
}

impl<S: KvStore> ChatShell<S> {
    /// Start a session, restoring the username from storage if one is valid.
    pub fn start(persistence: UsernamePersistence<S>, events: EventBus) -> Self {
        let gate = SessionGate::restore(&persistence);
        if let Some(username) = gate.username() {
            events.publish(ShellEvent::Identified {
                username: username.clone(),
                restored: true,
            });
        }
        Self {
            persistence,
            gate,
            log: MessageLog::new(),
            draft: InputBuffer::new(),
            username_draft: String::new(),
            username_error: None,
            events,
        }
    }

    /// Replace the username draft. Editing clears the inline error.
    pub fn update_username_draft(&mut self, text: impl Into<String>) {
        self.username_draft = text.into();
        self.username_error = None;
    }

    /// Submit the username draft.
    ///
    /// On a validation failure the draft is kept and the inline error set. If
    /// the session is already identified nothing is stored and the current
    /// username is returned.
    pub fn submit_username(&mut self) -> Result<Username, UsernameError> {
        if let Some(current) = self.gate.username() {
            return Ok(current.clone());
        }

        match self.gate.submit(&mut self.persistence, &self.username_draft) {
            Ok(username) => {
                self.username_error = None;
                self.events.publish(ShellEvent::Identified {
                    username: username.clone(),
                    restored: false,
                });
                Ok(username)
            }
            Err(err) => {
                if let UsernameError::Storage(storage) = &err {
                    warn!(error = %storage, "username was valid but could not be saved");
                }
                let reason = err.to_string();
                self.username_error = Some(reason.clone());
                self.events.publish(ShellEvent::UsernameRejected { reason });
                Err(err)
            }
        }
    }

    /// Replace the message draft verbatim.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft.update(text);
    }

    /// Send the draft: the shared path for the send button and the Enter key.
    ///
    /// Silently does nothing while unidentified or when the draft is blank;
    /// the username error display is never touched here.
    pub fn send(&mut self) -> Option<&ChatMessage> {
        let username = self.gate.username()?.clone();
        let content = self.draft.consume_and_clear()?;
        let message = ChatMessage::new(username, &content)?;

        let index = self.log.len();
        self.log.append(&self.gate, message.clone());
        self.events
            .publish(ShellEvent::MessageAppended { message, index });
        self.log.last()
    }

    /// Whether the send action is enabled.
    pub fn can_send(&self) -> bool {
        self.gate.is_identified() && !self.draft.is_blank()
    }

    pub fn placeholder(&self) -> &'static str {
        if self.gate.is_identified() {
            COMPOSE_PLACEHOLDER
        } else {
            GATED_PLACEHOLDER
        }
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    pub fn username_draft(&self) -> &str {
        &self.username_draft
    }

    pub fn username_error(&self) -> Option<&str> {
        self.username_error.as_deref()
    }

    pub fn persistence(&self) -> &UsernamePersistence<S> {
        &self.persistence
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::USERNAME_KEY;
    use crate::storage::MemoryKvStore;
    use gctchat_types::error::{RepositoryError, ValidationError};
    use gctchat_types::session::SessionState;
    use tokio::sync::broadcast;

    fn fresh_shell() -> (ChatShell<MemoryKvStore>, broadcast::Receiver<ShellEvent>) {
        let bus = EventBus::new(32);
        let rx = bus.subscribe();
        let shell = ChatShell::start(UsernamePersistence::new(MemoryKvStore::new()), bus);
        (shell, rx)
    }

    /// Reads as empty, refuses every write.
    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, RepositoryError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Io("read-only".to_string()))
        }
    }

    fn alice() -> Username {
        Username::parse("alice_01").unwrap()
    }

    fn identified_shell() -> ChatShell<MemoryKvStore> {
        let (mut shell, _rx) = fresh_shell();
        shell.update_username_draft("alice_01");
        shell.submit_username().unwrap();
        shell
    }

    #[test]
    fn test_start_restores_stored_username() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let store = MemoryKvStore::new().with_entry(USERNAME_KEY, "alice_01");

        let shell = ChatShell::start(UsernamePersistence::new(store), bus);

        assert_eq!(shell.gate().username(), Some(&alice()));
        assert_eq!(
            rx.try_recv().unwrap(),
            ShellEvent::Identified {
                username: alice(),
                restored: true
            }
        );
    }

    #[test]
    fn test_send_is_gated_while_unidentified() {
        let (mut shell, _rx) = fresh_shell();
        assert_eq!(shell.placeholder(), GATED_PLACEHOLDER);

        shell.update_draft("hi");
        assert!(!shell.can_send());
        assert!(shell.send().is_none());
        assert!(shell.log().is_empty());
        assert_eq!(shell.draft(), "hi");
    }

    #[test]
    fn test_rejected_username_keeps_draft_and_sets_error() {
        let (mut shell, mut rx) = fresh_shell();
        shell.update_username_draft("al");

        let err = shell.submit_username().unwrap_err();
        assert!(matches!(err, UsernameError::Validation(_)));
        assert_eq!(shell.username_draft(), "al");
        assert_eq!(
            shell.username_error(),
            Some(ValidationError::username().to_string().as_str())
        );
        assert_eq!(shell.gate().state(), &SessionState::Unidentified);
        assert!(matches!(
            rx.try_recv().unwrap(),
            ShellEvent::UsernameRejected { .. }
        ));

        shell.update_username_draft("ali");
        assert_eq!(shell.username_error(), None);
    }

    #[test]
    fn test_blank_send_keeps_error_display() {
        let (mut shell, _rx) = fresh_shell();
        shell.update_username_draft("x");
        assert!(shell.submit_username().is_err());

        shell.update_draft("   ");
        assert!(shell.send().is_none());
        assert!(shell.log().is_empty());
        assert!(shell.username_error().is_some());
    }

    #[test]
    fn test_end_to_end_single_message() {
        let (mut shell, mut rx) = fresh_shell();
        shell.update_username_draft("alice_01");
        let username = shell.submit_username().unwrap();
        assert_eq!(shell.gate().state(), &SessionState::Identified(username));
        assert_eq!(shell.persistence().load(), Some(alice()));
        assert_eq!(shell.placeholder(), COMPOSE_PLACEHOLDER);

        shell.update_draft("hi");
        assert!(shell.can_send());
        let sent = shell.send().cloned().unwrap();

        assert_eq!(sent, ChatMessage::new(alice(), "hi").unwrap());
        assert_eq!(shell.log().messages(), &[sent.clone()]);
        assert_eq!(shell.draft(), "");

        assert!(matches!(
            rx.try_recv().unwrap(),
            ShellEvent::Identified { restored: false, .. }
        ));
        assert_eq!(
            rx.try_recv().unwrap(),
            ShellEvent::MessageAppended {
                message: sent,
                index: 0
            }
        );
    }

    #[test]
    fn test_two_sends_preserve_order() {
        let mut shell = identified_shell();
        shell.update_draft("hi");
        shell.send();
        shell.update_draft("  there ");
        shell.send();

        let contents: Vec<&str> = shell.log().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["hi", "there"]);
        assert!(shell.log().iter().all(|m| m.username() == &alice()));
    }

    #[test]
    fn test_whitespace_send_after_identify_is_noop() {
        let mut shell = identified_shell();
        shell.update_draft(" \t ");
        assert!(!shell.can_send());
        assert!(shell.send().is_none());
        assert!(shell.log().is_empty());
        assert_eq!(shell.draft(), " \t ");
    }

    #[test]
    fn test_resubmitting_after_identified_changes_nothing() {
        let mut shell = identified_shell();
        shell.update_username_draft("bob_02");
        assert_eq!(shell.submit_username().unwrap(), alice());
        assert_eq!(shell.persistence().load(), Some(alice()));
    }

    #[test]
    fn test_storage_failure_keeps_gate_closed() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut shell = ChatShell::start(UsernamePersistence::new(ReadOnlyStore), bus);
        shell.update_username_draft("alice_01");

        let err = shell.submit_username().unwrap_err();
        assert!(matches!(err, UsernameError::Storage(_)));

        let reason = err.to_string();
        assert_eq!(shell.username_error(), Some(reason.as_str()));
        assert_eq!(shell.username_draft(), "alice_01");
        assert_eq!(shell.gate().state(), &SessionState::Unidentified);
        assert_eq!(
            rx.try_recv().unwrap(),
            ShellEvent::UsernameRejected { reason }
        );

        shell.update_draft("hi");
        assert!(shell.send().is_none());
        assert!(shell.log().is_empty());
    }
}
