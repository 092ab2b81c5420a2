//! HTTP layer for GCT Chat.
//!
//! Axum-based liveness endpoint at `/healthz`. It is independent of the chat
//! shell and is served by `gctchat serve`.

pub mod router;
