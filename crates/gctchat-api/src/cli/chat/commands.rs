//! Slash command parsing for the chat loop.
//!
//! Lines starting with `/` are commands and never become messages.

use std::io::{self, Write};

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Reprint the transcript of this session.
    History,
    /// Show the current username.
    WhoAmI,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/whoami" | "/me" => Some(ChatCommand::WhoAmI),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Write the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}    Show this help message", style("/help").cyan())?;
    writeln!(out, "  {}   Clear the screen", style("/clear").cyan())?;
    writeln!(out, "  {} Show the messages of this session", style("/history").cyan())?;
    writeln!(out, "  {}  Show your username", style("/whoami").cyan())?;
    writeln!(out, "  {}    End the chat session", style("/exit").cyan())?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Enter sends, Ctrl+D exits. Messages are not saved.").dim()
    )?;
    writeln!(out)
}
