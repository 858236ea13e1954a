// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for conversation logs.
//!
//! One row per user holds that user's serialized log. All access goes
//! through `tokio-rusqlite`'s single background thread.

pub mod adapter;
pub mod database;
pub mod queries;

pub use adapter::SqliteStore;
pub use database::Database;
