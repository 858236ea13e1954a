// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation store trait for per-user log persistence.

use async_trait::async_trait;

use crate::error::ShigeoError;
use crate::traits::adapter::PluginAdapter;
use crate::types::UserId;

/// Key/value persistence for serialized conversation logs, keyed by user.
///
/// The store is payload-agnostic: serialization lives with the memory
/// layer. A `put` replaces any previous payload for the same user.
#[async_trait]
pub trait ConversationStore: PluginAdapter {
    /// Returns the stored payload for `user`, or `None` if nothing was saved.
    async fn get(&self, user: &UserId) -> Result<Option<String>, ShigeoError>;

    /// Stores `payload` for `user`, replacing any previous value.
    async fn put(&self, user: &UserId, payload: &str) -> Result<(), ShigeoError>;

    /// Lists every user with a stored log, in ascending order.
    async fn list_users(&self) -> Result<Vec<UserId>, ShigeoError>;
}
