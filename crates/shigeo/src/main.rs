// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shigeo - answers questions about photos for visually impaired users.
//!
//! This is the binary entry point for the Shigeo assistant.

mod ask;
mod history;
mod runtime;
mod serve;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shigeo - answers questions about photos for visually impaired users.
#[derive(Parser, Debug)]
#[command(name = "shigeo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Ask questions about one image in an interactive REPL.
    Shell {
        /// Conversation owner.
        #[arg(long, default_value = "local")]
        user: String,
        /// Image the questions refer to.
        #[arg(long, default_value = "./image.jpg")]
        image: PathBuf,
    },
    /// Answer a single question and exit.
    Ask {
        #[arg(long)]
        user: String,
        #[arg(long)]
        image: PathBuf,
        /// The question, as one or more words.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print a user's stored conversation, or list users.
    History {
        #[arg(long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match shigeo_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            shigeo_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Shell { user, image }) => shell::run_shell(config, user, image).await,
        Some(Commands::Ask {
            user,
            image,
            question,
        }) => ask::run_ask(config, user, image, question.join(" ")).await,
        Some(Commands::History { user }) => history::run_history(config, user).await,
        None => {
            println!("shigeo: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("shigeo: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` overrides the configured level. Output goes to stderr so it
/// never interleaves with answers printed on stdout.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shigeo={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
