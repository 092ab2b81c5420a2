//! Key-value store trait.
//!
//! Defines the interface for the client-local settings slot.
//! Implementations live in gctchat-infra.

use gctchat_types::error::RepositoryError;

/// Trait for string-valued persistent storage.
///
/// Every call is a single synchronous operation that runs to completion;
/// there is no transactional discipline and no arbitration between
/// processes sharing the same backing store (last write wins).
pub trait KvStore: Send {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Set a value for a key (upsert).
    fn set(&mut self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
