//! Composition and transcript for the chat shell.
//!
//! `InputBuffer` holds the draft, `MessageLog` the transcript, and
//! `ChatShell` ties them to the session gate.

pub mod input;
pub mod log;
pub mod shell;

pub use input::InputBuffer;
pub use log::MessageLog;
pub use shell::ChatShell;
