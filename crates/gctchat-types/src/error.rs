use thiserror::Error;

use crate::identity::{USERNAME_MAX_LEN, USERNAME_MIN_LEN};

/// A username candidate did not match the allowed pattern.
///
/// The display text is shown to the user as-is, so it names both the
/// character set and the length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Username must be {min_len}-{max_len} chars, alphanumeric, _, -, .")]
pub struct ValidationError {
    pub min_len: usize,
    pub max_len: usize,
}

impl ValidationError {
    /// The error for a rejected username candidate.
    pub fn username() -> Self {
        Self {
            min_len: USERNAME_MIN_LEN,
            max_len: USERNAME_MAX_LEN,
        }
    }
}

/// Errors from key-value store operations (used by trait definitions in gctchat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("corrupt store: {0}")]
    Corrupt(String),
}

/// Errors from submitting a username.
#[derive(Debug, Error)]
pub enum UsernameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not save username: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::username();
        assert_eq!(
            err.to_string(),
            "Username must be 3-32 chars, alphanumeric, _, -, ."
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Corrupt("expected a JSON object".to_string());
        assert_eq!(err.to_string(), "corrupt store: expected a JSON object");
    }

    #[test]
    fn test_username_error_is_transparent_for_validation() {
        let err = UsernameError::from(ValidationError::username());
        assert_eq!(err.to_string(), ValidationError::username().to_string());

        let err = UsernameError::from(RepositoryError::Io("disk full".to_string()));
        assert!(err.to_string().contains("disk full"));
    }
}
