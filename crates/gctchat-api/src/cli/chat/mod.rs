//! Interactive terminal chat for GCT Chat.
//!
//! This module implements the chat session: welcome banner, the blocking
//! username prompt, the line-editing input loop, slash commands, and the view
//! that redraws from shell events. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
