//! The validated display name of the local user.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest accepted username.
pub const USERNAME_MIN_LEN: usize = 3;
/// Longest accepted username.
pub const USERNAME_MAX_LEN: usize = 32;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]{3,32}$").expect("username pattern is a valid regex")
});

/// A display name matching `[A-Za-z0-9_.-]{3,32}`.
///
/// The only way to obtain one is through [`Username::parse`] (or the
/// `TryFrom<String>` used by serde), so holding a `Username` means the value
/// was valid when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate `candidate` exactly as given. Surrounding whitespace is not
    /// stripped and makes the candidate invalid.
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        if Self::is_valid(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(ValidationError::username())
        }
    }

    pub fn is_valid(candidate: &str) -> bool {
        USERNAME_PATTERN.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::username())
        }
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Username {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
