//! Storage abstractions for GCT Chat.
//!
//! Defines the key-value store trait. The durable implementation lives in
//! gctchat-infra; `MemoryKvStore` backs ephemeral sessions and tests.

pub mod kv_store;
pub mod memory;

pub use kv_store::KvStore;
pub use memory::MemoryKvStore;
