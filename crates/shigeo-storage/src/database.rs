// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management: PRAGMA setup and schema creation.

use std::path::Path;

use shigeo_core::ShigeoError;
use tokio_rusqlite::Connection;
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS conversation_logs (
    user_id TEXT PRIMARY KEY,
    payload TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

/// Owned handle to the conversation database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and ensures the schema.
    ///
    /// Parent directories are created as needed.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, ShigeoError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ShigeoError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| ShigeoError::Storage {
                source: Box::new(e),
            })?;
        let db = Self { conn };
        db.prepare(wal_mode).await?;
        debug!(path, wal_mode, "conversation database opened");
        Ok(db)
    }

    /// Opens a private in-memory database with the schema applied.
    pub async fn open_in_memory() -> Result<Self, ShigeoError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| ShigeoError::Storage {
                source: Box::new(e),
            })?;
        let db = Self { conn };
        db.prepare(false).await?;
        Ok(db)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    async fn prepare(&self, wal_mode: bool) -> Result<(), ShigeoError> {
        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                if wal_mode {
                    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
                }
                conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
                conn.execute_batch(SCHEMA)?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }
}

/// Wraps a tokio-rusqlite failure as a storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> ShigeoError {
    ShigeoError::Storage {
        source: Box::new(e),
    }
}
