// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`ConversationStore`] trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use shigeo_config::model::StorageConfig;
use shigeo_core::{
    AdapterType, ConversationStore, HealthStatus, PluginAdapter, ShigeoError, UserId,
};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed conversation store.
///
/// The database is opened lazily by [`SqliteStore::initialize`]; every
/// other operation fails with a storage error until then.
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Wraps an already-open database.
    pub fn from_database(db: Database) -> Self {
        Self {
            config: StorageConfig::default(),
            db: OnceCell::from(db),
        }
    }

    /// Opens the database file and creates the schema if needed.
    pub async fn initialize(&self) -> Result<(), ShigeoError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| ShigeoError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite store initialized");
        Ok(())
    }

    fn db(&self) -> Result<&Database, ShigeoError> {
        self.db.get().ok_or_else(|| ShigeoError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        let Ok(db) = self.db() else {
            return Ok(HealthStatus::Unhealthy("not initialized".into()));
        };
        let probe = db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await;
        Ok(match probe {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        })
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        if let Some(db) = self.db.get() {
            db.connection()
                .call(|conn| -> Result<(), rusqlite::Error> {
                    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                    Ok(())
                })
                .await
                .map_err(map_tr_err)?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for SqliteStore {
    async fn get(&self, user: &UserId) -> Result<Option<String>, ShigeoError> {
        queries::conversations::get_payload(self.db()?, user.as_str()).await
    }

    async fn put(&self, user: &UserId, payload: &str) -> Result<(), ShigeoError> {
        let now = chrono::Utc::now().to_rfc3339();
        queries::conversations::upsert_payload(self.db()?, user.as_str(), payload, &now).await
    }

    async fn list_users(&self) -> Result<Vec<UserId>, ShigeoError> {
        let ids = queries::conversations::list_user_ids(self.db()?).await?;
        Ok(ids.into_iter().map(UserId).collect())
    }
}
