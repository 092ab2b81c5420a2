//! Username persistence on top of a `KvStore`.
//!
//! The username lives under a single fixed key. Reads never fail: anything
//! that is not a valid username (missing, malformed, unreadable) loads as
//! "no username".

use gctchat_types::error::UsernameError;
use gctchat_types::identity::Username;
use tracing::{debug, warn};

use crate::storage::KvStore;

/// Key of the username slot.
pub const USERNAME_KEY: &str = "gct-chat-username";

/// Validates and stores the display name in a `KvStore`.
pub struct UsernamePersistence<S: KvStore> {
    store: S,
}

impl<S: KvStore> UsernamePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted username.
    ///
    /// Invalid stored values and store read failures both yield `None`.
    pub fn load(&self) -> Option<Username> {
        match self.store.get(USERNAME_KEY) {
            Ok(Some(raw)) => match Username::parse(&raw) {
                Ok(username) => {
                    debug!(%username, "loaded stored username");
                    Some(username)
                }
                Err(_) => {
                    debug!("stored username does not match the pattern, ignoring it");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read stored username, treating it as absent");
                None
            }
        }
    }

    /// Validate `candidate` and, if valid, overwrite the stored value with it.
    ///
    /// On validation failure the store is not touched.
    pub fn store(&mut self, candidate: &str) -> Result<Username, UsernameError> {
        let username = Username::parse(candidate)?;
        self.store.set(USERNAME_KEY, username.as_str())?;
        debug!(%username, "stored username");
        Ok(username)
    }

    pub fn storage_key(&self) -> &'static str {
        USERNAME_KEY
    }

    /// The backing store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use gctchat_types::error::{RepositoryError, ValidationError};

    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, RepositoryError> {
            Err(RepositoryError::Io("unreadable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Io("read-only".to_string()))
        }
    }

    #[test]
    fn test_load_empty_store() {
        let persistence = UsernamePersistence::new(MemoryKvStore::new());
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let mut persistence = UsernamePersistence::new(MemoryKvStore::new());
        let stored = persistence.store("alice_01").unwrap();
        assert_eq!(stored, "alice_01");
        assert_eq!(persistence.load(), Some(stored));
    }

    #[test]
    fn test_invalid_stored_value_loads_as_absent() {
        let store = MemoryKvStore::new().with_entry(USERNAME_KEY, "ab");
        let persistence = UsernamePersistence::new(store);
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_invalid_candidate_leaves_storage_untouched() {
        let store = MemoryKvStore::new().with_entry(USERNAME_KEY, "bob");
        let mut persistence = UsernamePersistence::new(store);

        let too_long = "x".repeat(33);
        for candidate in ["ab", "has space", "", too_long.as_str(), "emoji🙂"] {
            let err = persistence.store(candidate).unwrap_err();
            assert!(matches!(err, UsernameError::Validation(ValidationError { .. })));
        }

        assert_eq!(
            persistence.inner().get(USERNAME_KEY).unwrap().as_deref(),
            Some("bob")
        );
    }

    #[test]
    fn test_store_overwrites_and_is_idempotent() {
        let mut persistence = UsernamePersistence::new(MemoryKvStore::new());
        persistence.store("alice_01").unwrap();
        persistence.store("carol.k").unwrap();
        persistence.store("carol.k").unwrap();
        assert_eq!(persistence.load().unwrap(), "carol.k");
    }

    #[test]
    fn test_read_failure_loads_as_absent() {
        let persistence = UsernamePersistence::new(BrokenStore);
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_write_failure_surfaces_as_storage_error() {
        let mut persistence = UsernamePersistence::new(BrokenStore);
        let err = persistence.store("alice_01").unwrap_err();
        assert!(matches!(err, UsernameError::Storage(_)));
    }

    #[test]
    fn test_storage_key() {
        let persistence = UsernamePersistence::new(MemoryKvStore::new());
        assert_eq!(persistence.storage_key(), "gct-chat-username");
    }
}
