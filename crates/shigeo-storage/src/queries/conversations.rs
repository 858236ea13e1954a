// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation log rows: one serialized payload per user.

use rusqlite::{OptionalExtension, params};
use shigeo_core::ShigeoError;

use crate::database::{Database, map_tr_err};

/// Fetch the payload stored for `user_id`.
pub async fn get_payload(db: &Database, user_id: &str) -> Result<Option<String>, ShigeoError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT payload FROM conversation_logs WHERE user_id = ?1",
                params![user_id],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Insert or replace the payload for `user_id`.
pub async fn upsert_payload(
    db: &Database,
    user_id: &str,
    payload: &str,
    updated_at: &str,
) -> Result<(), ShigeoError> {
    let user_id = user_id.to_string();
    let payload = payload.to_string();
    let updated_at = updated_at.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO conversation_logs (user_id, payload, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(user_id) DO UPDATE SET
                     payload = excluded.payload,
                     updated_at = excluded.updated_at",
                params![user_id, payload, updated_at],
            )?;
            Ok::<(), rusqlite::Error>(())
        })
        .await
        .map_err(map_tr_err)
}

/// All user ids with a stored log, ascending.
pub async fn list_user_ids(db: &Database) -> Result<Vec<String>, ShigeoError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare("SELECT user_id FROM conversation_logs ORDER BY user_id ASC")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)
}
