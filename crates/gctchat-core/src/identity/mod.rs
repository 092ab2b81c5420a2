//! Durable storage of the local display name.

pub mod persistence;

pub use persistence::{USERNAME_KEY, UsernamePersistence};
