use serde::Serialize;

use crate::identity::Username;

/// A single line of the transcript, authored by the local user.
///
/// `content` is stored trimmed and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    username: Username,
    content: String,
}

impl ChatMessage {
    /// Build a message, trimming `content`. Returns `None` if nothing is left.
    pub fn new(username: Username, content: &str) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            username,
            content: content.to_string(),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
