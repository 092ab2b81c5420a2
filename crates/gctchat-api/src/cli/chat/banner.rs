//! Welcome banner display for chat sessions.

use std::io::{self, Write};

use console::style;

use gctchat_types::session::SessionState;

/// Application title shown at the top of every session.
pub const APP_TITLE: &str = "GCT Chat App";

/// Print the welcome banner at the start of a chat session.
///
/// Shows the title, the session state, and where the username is kept.
pub fn print_welcome_banner(
    out: &mut impl Write,
    state: &SessionState,
    store_location: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style(APP_TITLE).cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("Session:").bold(), style(state).dim())?;
    writeln!(
        out,
        "  {}  {}",
        style("Username store:").bold(),
        style(store_location).dim()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    )?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)
}
