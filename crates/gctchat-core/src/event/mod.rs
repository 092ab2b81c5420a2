//! Event bus for shell state notifications.
//!
//! Provides an `EventBus` that distributes `ShellEvent` messages to all
//! subscribers via a `tokio::sync::broadcast` channel.

pub mod bus;

pub use bus::EventBus;
