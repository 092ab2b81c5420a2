//! Event types for the chat shell event bus.
//!
//! `ShellEvent` is published by the shell whenever its observable state
//! changes. All variants are Clone + Send + Sync for use with tokio broadcast
//! channels.

use serde::Serialize;

use crate::chat::ChatMessage;
use crate::identity::Username;

/// State changes a view layer redraws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    /// The session gate opened.
    Identified {
        username: Username,
        /// True when the name came from storage rather than a submission.
        restored: bool,
    },

    /// A message was appended to the transcript at `index`.
    MessageAppended { message: ChatMessage, index: usize },

    /// A submitted username failed validation. `reason` is the inline error text.
    UsernameRejected { reason: String },
}
