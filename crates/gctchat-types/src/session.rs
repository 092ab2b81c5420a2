use std::fmt;

use serde::Serialize;

use crate::identity::Username;

/// Whether the local user has a display name for this session.
///
/// The only transition is `Unidentified` -> `Identified`; it happens at most
/// once per process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "username", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unidentified,
    Identified(Username),
}

impl SessionState {
    pub fn username(&self) -> Option<&Username> {
        match self {
            SessionState::Unidentified => None,
            SessionState::Identified(username) => Some(username),
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, SessionState::Identified(_))
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unidentified => write!(f, "unidentified"),
            SessionState::Identified(username) => write!(f, "identified as {username}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unidentified() {
        let state = SessionState::default();
        assert!(!state.is_identified());
        assert!(state.username().is_none());
        assert_eq!(state.to_string(), "unidentified");
    }

    #[test]
    fn test_identified_serde_shape() {
        let state = SessionState::Identified(Username::parse("alice_01").unwrap());
        assert_eq!(state.to_string(), "identified as alice_01");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"state": "identified", "username": "alice_01"})
        );
    }
}
