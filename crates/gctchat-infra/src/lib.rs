//! Infrastructure layer for GCT Chat.
//!
//! Contains the implementation of the `KvStore` trait defined in
//! `gctchat-core` (a JSON state file), data-directory resolution and the
//! configuration loader.

pub mod config;
pub mod filesystem;
pub mod kv;
