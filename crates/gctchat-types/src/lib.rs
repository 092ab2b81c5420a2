//! Shared domain types for GCT Chat.
//!
//! This crate contains the types used across the chat shell: the validated
//! `Username`, `ChatMessage`, the session state, shell events, health payload
//! and configuration, plus their error types.
//!
//! Zero infrastructure dependencies -- only serde, regex, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod health;
pub mod identity;
pub mod session;
