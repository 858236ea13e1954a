// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load/save of conversation logs over a [`ConversationStore`].

use std::sync::Arc;

use shigeo_core::{ConversationStore, ConversationTurn, ShigeoError, UserId};
use tracing::{debug, warn};

use crate::log::ConversationLog;

/// Per-user conversation memory backed by a key-value store.
///
/// Saves are unconditional overwrites with no locking. Two concurrent calls
/// for the same user can interleave and the last save wins.
#[derive(Clone)]
pub struct ConversationMemory {
    store: Arc<dyn ConversationStore>,
}

impl ConversationMemory {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Returns the stored log for `user`.
    ///
    /// Never fails: a missing record, a store read error, and an
    /// undecodable payload all yield an empty log.
    pub async fn load(&self, user: &UserId) -> ConversationLog {
        let payload = match self.store.get(user).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(user_id = %user, "no stored conversation, starting empty");
                return ConversationLog::new();
            }
            Err(e) => {
                warn!(user_id = %user, error = %e, "conversation log unreadable, starting empty");
                return ConversationLog::new();
            }
        };

        match serde_json::from_str::<ConversationLog>(&payload) {
            Ok(log) => {
                debug!(user_id = %user, turns = log.len(), "loaded conversation");
                log
            }
            Err(e) => {
                warn!(user_id = %user, error = %e, "conversation log corrupt, starting empty");
                ConversationLog::new()
            }
        }
    }

    /// Overwrites the stored log for `user`.
    pub async fn save(&self, user: &UserId, log: &ConversationLog) -> Result<(), ShigeoError> {
        let payload = serde_json::to_string(log).map_err(|e| {
            ShigeoError::Internal(format!("failed to serialize conversation log: {e}"))
        })?;
        self.store.put(user, &payload).await
    }

    /// Appends `turn`, evicts the oldest turns past the limit, and saves.
    pub async fn record(
        &self,
        user: &UserId,
        log: ConversationLog,
        turn: ConversationTurn,
    ) -> Result<ConversationLog, ShigeoError> {
        let log = log.append(turn).truncate();
        self.save(user, &log).await?;
        debug!(user_id = %user, turns = log.len(), "conversation saved");
        Ok(log)
    }
}
