// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shigeo shell` command implementation.
//!
//! Interactive REPL asking questions about one image on behalf of one user.
//! History persists across invocations through the configured store.

use std::path::PathBuf;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use shigeo_config::ShigeoConfig;
use shigeo_core::{ImageReference, ShigeoError, UserId};

use crate::history::print_turns;
use crate::runtime::Runtime;

/// Runs the `shigeo shell` interactive REPL.
pub async fn run_shell(
    config: ShigeoConfig,
    user: String,
    image: PathBuf,
) -> Result<(), ShigeoError> {
    if !image.is_file() {
        eprintln!(
            "{}: image {} not found; questions will fail until it exists",
            "warning".yellow(),
            image.display()
        );
    }

    let runtime = Runtime::build(&config).await?;
    let orchestrator = runtime.orchestrator();
    let user = UserId(user);
    let image = ImageReference(image.to_string_lossy().into_owned());

    let mut rl = DefaultEditor::new()
        .map_err(|e| ShigeoError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", format!("{} shell", config.agent.name).bold().green());
    println!("Asking about {} as {}.", image.to_string().cyan(), user.to_string().cyan());
    println!(
        "Type {} to show the conversation, {} to exit.\n",
        "/history".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => match ShellInput::parse(&line) {
                ShellInput::Quit => break,
                ShellInput::Blank => continue,
                ShellInput::History => {
                    let _ = rl.add_history_entry(&line);
                    let log = orchestrator.memory().load(&user).await;
                    print_turns(&log);
                }
                ShellInput::Question(question) => {
                    let _ = rl.add_history_entry(&line);
                    match orchestrator.answer(question, &user, &image).await {
                        Ok(answer) => {
                            println!("{} {}", format!("{}:", config.agent.name).blue().bold(), answer.text);
                            println!("{}", format!("({} route)", answer.route).dimmed());
                        }
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    }
                }
            },
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    runtime.shutdown().await;
    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum ShellInput<'a> {
    Quit,
    Blank,
    History,
    /// The line exactly as typed; only command matching is trimmed.
    Question(&'a str),
}

impl<'a> ShellInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => ShellInput::Quit,
            "" => ShellInput::Blank,
            "/history" => ShellInput::History,
            _ => ShellInput::Question(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_match_after_trimming() {
        assert_eq!(ShellInput::parse("  /quit "), ShellInput::Quit);
        assert_eq!(ShellInput::parse("/exit"), ShellInput::Quit);
        assert_eq!(ShellInput::parse(" /history"), ShellInput::History);
        assert_eq!(ShellInput::parse("   "), ShellInput::Blank);
    }

    #[test]
    fn questions_keep_the_raw_line() {
        assert_eq!(
            ShellInput::parse("  what is in front of me? "),
            ShellInput::Question("  what is in front of me? ")
        );
    }
}
