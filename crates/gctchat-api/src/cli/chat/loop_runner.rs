//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: shell start (restoring a saved
//! username), welcome banner, the blocking username prompt, then the input
//! loop with slash commands. Every state change is rendered by `ChatView`
//! from shell events.

use std::io::{self, Write};

use console::style;
use dialoguer::Input;
use tracing::{debug, info};

use gctchat_core::chat::ChatShell;
use gctchat_core::event::EventBus;
use gctchat_core::identity::UsernamePersistence;
use gctchat_core::storage::{KvStore, MemoryKvStore};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{ChatView, render_transcript};

/// Run the interactive chat loop.
///
/// With `ephemeral` the username lives in memory only and is forgotten when
/// the session ends. With `quiet` the banner, hints and farewell are skipped;
/// messages, errors and command output are still shown.
pub async fn run_chat_loop(state: &AppState, ephemeral: bool, quiet: bool) -> anyhow::Result<()> {
    if ephemeral {
        let persistence = UsernamePersistence::new(MemoryKvStore::new());
        run_session(persistence, "memory (ephemeral)", quiet).await
    } else {
        let store = state.username_store();
        let location = store.path().display().to_string();
        run_session(UsernamePersistence::new(store), &location, quiet).await
    }
}

async fn run_session<S: KvStore>(
    persistence: UsernamePersistence<S>,
    store_location: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let bus = EventBus::default();
    let mut view = ChatView::new(bus.subscribe());
    let mut shell = ChatShell::start(persistence, bus);
    info!(state = %shell.gate().state(), "chat session started");

    {
        let mut stdout = io::stdout().lock();
        if !quiet {
            print_welcome_banner(&mut stdout, shell.gate().state(), store_location)?;
        }
        view.drain(&mut stdout)?;
    }

    if !shell.gate().is_identified() && !prompt_for_username(&mut shell, &mut view, quiet)? {
        if !quiet {
            println!("\n  {}", style("Session ended.").dim());
        }
        return Ok(());
    }

    let Some(username) = shell.gate().username().cloned() else {
        return Ok(());
    };

    if !quiet {
        println!();
        render_transcript(&mut io::stdout().lock(), shell.log())?;
        println!("  {}", style(shell.placeholder()).dim());
        println!();
    }

    let prompt = format!("  {} ", style(format!("{username} >")).green().bold());
    let (mut chat_input, mut writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                if !quiet {
                    writeln!(writer, "\n  {}", style("Session ended.").dim())?;
                }
                break;
            }
            InputEvent::Interrupted if quiet => {}
            InputEvent::Interrupted => {
                writeln!(
                    writer,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                )?;
            }
            InputEvent::Line(line) => {
                if let Some(cmd) = commands::parse(&line) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(&mut writer)?,
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            if !quiet {
                                writeln!(writer, "\n  {}", style("Session ended.").dim())?;
                            }
                            break;
                        }
                        ChatCommand::History => {
                            writeln!(writer)?;
                            render_transcript(&mut writer, shell.log())?;
                            writeln!(writer)?;
                        }
                        ChatCommand::WhoAmI => {
                            writeln!(writer, "  {}", style(&username).cyan().bold())?;
                        }
                        ChatCommand::Unknown(name) => {
                            writeln!(
                                writer,
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            )?;
                        }
                    }
                    continue;
                }

                shell.update_draft(line);
                if shell.send().is_none() {
                    debug!("blank draft, nothing sent");
                }
                view.drain(&mut writer)?;
            }
        }
    }

    info!(messages = shell.log().len(), "chat session ended");
    Ok(())
}

/// Block until a valid username is submitted.
///
/// Returns `false` when the user aborts the prompt (Ctrl+C / Ctrl+D).
fn prompt_for_username<S: KvStore>(
    shell: &mut ChatShell<S>,
    view: &mut ChatView,
    quiet: bool,
) -> anyhow::Result<bool> {
    if !quiet {
        println!("  {}", style(shell.placeholder()).dim());
    }

    while !shell.gate().is_identified() {
        let entered = Input::<String>::new()
            .with_prompt("Username")
            .with_initial_text(shell.username_draft())
            .allow_empty(true)
            .interact_text();

        let entered = match entered {
            Ok(entered) => entered,
            Err(err) => {
                debug!(error = %err, "username prompt aborted");
                return Ok(false);
            }
        };

        shell.update_username_draft(entered);
        // Rejections are rendered from the event below.
        let _ = shell.submit_username();
        view.drain(&mut io::stdout().lock())?;
    }

    Ok(true)
}
