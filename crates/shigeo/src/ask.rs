// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shigeo ask` command implementation.

use std::path::PathBuf;

use shigeo_config::ShigeoConfig;
use shigeo_core::{ImageReference, ShigeoError, UserId};

use crate::runtime::Runtime;

/// Answers one question and prints only the answer on stdout.
pub async fn run_ask(
    config: ShigeoConfig,
    user: String,
    image: PathBuf,
    question: String,
) -> Result<(), ShigeoError> {
    let runtime = Runtime::build(&config).await?;
    let result = runtime
        .orchestrator()
        .answer_question(
            &question,
            &UserId(user),
            &ImageReference(image.to_string_lossy().into_owned()),
        )
        .await;
    runtime.shutdown().await;

    println!("{}", result?);
    Ok(())
}
