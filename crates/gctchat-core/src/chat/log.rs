//! The in-memory transcript.
//!
//! Append-only and unbounded: there is no edit, delete, truncate or
//! eviction, and nothing is persisted.

use gctchat_types::chat::ChatMessage;
use tracing::debug;

use crate::session::SessionGate;

/// Ordered sequence of messages for the current process.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` at the tail and return the whole transcript.
    ///
    /// While `gate` is unidentified this is a no-op. Blank content cannot
    /// reach here because `ChatMessage` never holds it.
    pub fn append(&mut self, gate: &SessionGate, message: ChatMessage) -> &[ChatMessage] {
        if !gate.is_identified() {
            debug!("append ignored, session is not identified");
            return &self.messages;
        }
        self.messages.push(message);
        debug!(len = self.messages.len(), "message appended");
        &self.messages
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
