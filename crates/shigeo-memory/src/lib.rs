// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded per-user conversation memory.
//!
//! A [`ConversationLog`] holds at most [`MAX_TURNS`] question/answer pairs,
//! oldest first. [`ConversationMemory`] loads and saves logs through a
//! [`ConversationStore`], treating unreadable or corrupt history as empty.

pub mod log;
pub mod memory;

pub use log::{ConversationLog, MAX_TURNS};
pub use memory::ConversationMemory;

pub use shigeo_core::ConversationStore;
