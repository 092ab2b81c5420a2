//! Durable key-value storage.

pub mod file;

pub use file::{FileKvStore, STATE_FILE_NAME};
