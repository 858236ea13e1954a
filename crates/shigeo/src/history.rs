// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shigeo history` command implementation.
//!
//! Reads the store directly; no API credentials are needed.

use colored::Colorize;
use shigeo_config::ShigeoConfig;
use shigeo_core::{ConversationStore, ShigeoError, UserId};
use shigeo_memory::{ConversationLog, ConversationMemory};

use crate::runtime::open_store;

/// Prints one user's turns, or every known user id when `user` is `None`.
pub async fn run_history(config: ShigeoConfig, user: Option<String>) -> Result<(), ShigeoError> {
    let store = open_store(&config).await?;

    match user {
        Some(user) => {
            let memory = ConversationMemory::new(store);
            print_turns(&memory.load(&UserId(user)).await);
        }
        None => {
            let users = store.list_users().await?;
            if users.is_empty() {
                println!("{}", "no conversations stored".dimmed());
            }
            for user in users {
                println!("{user}");
            }
        }
    }
    Ok(())
}

/// Prints a conversation log, oldest turn first.
pub fn print_turns(log: &ConversationLog) {
    if log.is_empty() {
        println!("{}", "no turns stored".dimmed());
        return;
    }
    for (i, turn) in log.turns().iter().enumerate() {
        println!("{} {}", format!("{:>2}. Q:", i + 1).yellow(), turn.question);
        println!("    {} {}", "A:".green(), turn.answer);
    }
}
