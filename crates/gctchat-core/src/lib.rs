//! Chat shell state machine for GCT Chat.
//!
//! This crate defines the `KvStore` port that the infrastructure layer
//! implements, and the synchronous core built on it: username persistence,
//! the session gate, the input buffer and the message log, wired together by
//! `ChatShell`. It depends only on `gctchat-types` -- never on
//! `gctchat-infra` or any IO crate.

pub mod chat;
pub mod event;
pub mod identity;
pub mod session;
pub mod storage;
