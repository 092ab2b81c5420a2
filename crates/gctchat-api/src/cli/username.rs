//! Username CLI commands: show, set.
//!
//! # Examples
//!
//! ```bash
//! gctchat username show
//! gctchat username set alice_01
//! gctchat username set          # prompts
//! ```

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;
use dialoguer::Input;

use gctchat_core::identity::UsernamePersistence;
use gctchat_core::storage::KvStore;
use gctchat_types::error::UsernameError;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum UsernameCommand {
    /// Print the persisted username, if any.
    Show,

    /// Validate and persist a username.
    Set {
        /// New username. Prompted for when omitted.
        name: Option<String>,
    },
}

pub fn handle_username_command(
    state: &AppState,
    action: UsernameCommand,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let store = state.username_store();
    let location = store.path().display().to_string();
    let mut persistence = UsernamePersistence::new(store);
    let mut stdout = io::stdout().lock();

    match action {
        UsernameCommand::Show => show_username(&persistence, &location, json, quiet, &mut stdout),
        UsernameCommand::Set { name } => {
            let name = match name {
                Some(name) => name,
                None => Input::<String>::new()
                    .with_prompt("Username")
                    .interact_text()?,
            };
            set_username(&mut persistence, &name, json, quiet, &mut stdout)
        }
    }
}

/// Print the stored username, or a hint when none is saved.
///
/// With `quiet` only the bare name is printed, and nothing when none is saved.
pub fn show_username<S: KvStore>(
    persistence: &UsernamePersistence<S>,
    location: &str,
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let username = persistence.load();

    if json {
        let value = serde_json::json!({
            "username": username.as_ref().map(|u| u.as_str()),
            "key": persistence.storage_key(),
            "path": location,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    match username {
        Some(username) if quiet => writeln!(out, "{username}")?,
        Some(username) => writeln!(out, "  {}", style(username).cyan().bold())?,
        None if quiet => {}
        None => writeln!(
            out,
            "  {} No username saved. Set one with: {}",
            style("i").blue().bold(),
            style("gctchat username set <name>").yellow()
        )?,
    }
    Ok(())
}

/// Validate and persist `name`, overwriting any previous value.
///
/// With `quiet` (and no `--json`) success prints nothing.
pub fn set_username<S: KvStore>(
    persistence: &mut UsernamePersistence<S>,
    name: &str,
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let username = match persistence.store(name) {
        Ok(username) => username,
        Err(UsernameError::Validation(err)) => bail!("{err}"),
        Err(err) => return Err(err.into()),
    };
    tracing::info!(username = %username, "username saved");

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"set": true, "username": username.as_str()})
        )?;
    } else if !quiet {
        writeln!(
            out,
            "  {} Username set to '{}'",
            style("✓").green().bold(),
            style(&username).bold()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gctchat_core::identity::USERNAME_KEY;
    use gctchat_core::storage::MemoryKvStore;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn show_without_username_prints_hint() {
        console::set_colors_enabled(false);
        let persistence = UsernamePersistence::new(MemoryKvStore::new());
        let mut out = Vec::new();
        show_username(&persistence, "mem", false, false, &mut out).unwrap();
        assert!(output(out).contains("No username saved"));
    }

    #[test]
    fn show_json_reports_key_and_value() {
        let persistence =
            UsernamePersistence::new(MemoryKvStore::new().with_entry(USERNAME_KEY, "alice_01"));
        let mut out = Vec::new();
        show_username(&persistence, "/tmp/state.json", true, false, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
        assert_eq!(value["username"], "alice_01");
        assert_eq!(value["key"], USERNAME_KEY);
        assert_eq!(value["path"], "/tmp/state.json");
    }

    #[test]
    fn show_json_ignores_invalid_stored_value() {
        let persistence = UsernamePersistence::new(MemoryKvStore::new().with_entry(USERNAME_KEY, "x"));
        let mut out = Vec::new();
        show_username(&persistence, "mem", true, false, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
        assert!(value["username"].is_null());
    }

    #[test]
    fn set_persists_valid_name() {
        console::set_colors_enabled(false);
        let mut persistence = UsernamePersistence::new(MemoryKvStore::new());
        let mut out = Vec::new();
        set_username(&mut persistence, "bob.smith", false, false, &mut out).unwrap();

        assert!(output(out).contains("Username set to 'bob.smith'"));
        assert_eq!(persistence.load().unwrap(), "bob.smith");
    }

    #[test]
    fn set_rejects_invalid_name_and_keeps_previous() {
        let mut persistence =
            UsernamePersistence::new(MemoryKvStore::new().with_entry(USERNAME_KEY, "alice_01"));
        let mut out = Vec::new();
        let err = set_username(&mut persistence, "bad name!", false, false, &mut out).unwrap_err();

        assert!(err.to_string().starts_with("Username must be 3-32 chars"));
        assert!(out.is_empty());
        assert_eq!(persistence.load().unwrap(), "alice_01");
    }

    #[test]
    fn quiet_set_writes_nothing_but_persists() {
        let mut persistence = UsernamePersistence::new(MemoryKvStore::new());
        let mut out = Vec::new();
        set_username(&mut persistence, "bob.smith", false, true, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(persistence.load().unwrap(), "bob.smith");
    }

    #[test]
    fn quiet_set_still_honors_json() {
        let mut persistence = UsernamePersistence::new(MemoryKvStore::new());
        let mut out = Vec::new();
        set_username(&mut persistence, "bob.smith", true, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
        assert_eq!(value["username"], "bob.smith");
    }

    #[test]
    fn quiet_show_prints_bare_name_or_nothing() {
        let persistence = UsernamePersistence::new(MemoryKvStore::new());
        let mut out = Vec::new();
        show_username(&persistence, "mem", false, true, &mut out).unwrap();
        assert!(out.is_empty());

        let persistence =
            UsernamePersistence::new(MemoryKvStore::new().with_entry(USERNAME_KEY, "alice_01"));
        let mut out = Vec::new();
        show_username(&persistence, "mem", false, true, &mut out).unwrap();
        assert_eq!(output(out), "alice_01\n");
    }
}
