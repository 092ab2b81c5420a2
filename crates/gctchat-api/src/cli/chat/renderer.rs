//! Terminal view of the chat shell.
//!
//! `ChatView` owns a subscription to the shell's event bus and redraws from
//! the events it receives. It never reads shell internals directly, so the
//! same events could drive any other front end.

use std::io::{self, Write};

use console::style;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use gctchat_core::chat::MessageLog;
use gctchat_types::chat::ChatMessage;
use gctchat_types::event::ShellEvent;

/// Shown in place of the transcript while it is empty.
pub const EMPTY_TRANSCRIPT: &str = "No messages yet.";

pub struct ChatView {
    events: Receiver<ShellEvent>,
}

impl ChatView {
    pub fn new(events: Receiver<ShellEvent>) -> Self {
        Self { events }
    }

    /// Render every pending event. Returns the number rendered.
    pub fn drain(&mut self, out: &mut impl Write) -> io::Result<usize> {
        let mut rendered = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    render_event(out, &event)?;
                    rendered += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "chat view fell behind, events dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        Ok(rendered)
    }
}

/// Render one shell event.
pub fn render_event(out: &mut impl Write, event: &ShellEvent) -> io::Result<()> {
    match event {
        ShellEvent::Identified {
            username,
            restored: true,
        } => writeln!(
            out,
            "  {} Welcome back, {}",
            style("*").cyan().bold(),
            style(username).cyan().bold()
        ),
        ShellEvent::Identified {
            username,
            restored: false,
        } => writeln!(
            out,
            "  {} Username saved. Chatting as {}",
            style("✓").green().bold(),
            style(username).cyan().bold()
        ),
        ShellEvent::MessageAppended { message, .. } => {
            writeln!(out, "{}", format_message(message))
        }
        ShellEvent::UsernameRejected { reason } => {
            writeln!(out, "  {} {}", style("!").red().bold(), style(reason).red())
        }
    }
}

/// One transcript line: `username: content`.
pub fn format_message(message: &ChatMessage) -> String {
    format!(
        "  {}: {}",
        style(message.username()).green().bold(),
        printable(message.content())
    )
}

/// Strip ANSI escapes and other control characters so typed or pasted
/// content cannot drive the terminal. Tabs become spaces.
fn printable(content: &str) -> String {
    console::strip_ansi_codes(content)
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Print the whole transcript, or the empty-state text.
pub fn render_transcript(out: &mut impl Write, log: &MessageLog) -> io::Result<()> {
    if log.is_empty() {
        return writeln!(out, "  {}", style(EMPTY_TRANSCRIPT).dim());
    }
    for message in log {
        writeln!(out, "{}", format_message(message))?;
    }
    Ok(())
}
