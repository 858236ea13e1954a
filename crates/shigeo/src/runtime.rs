// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter wiring shared by every subcommand.

use std::sync::Arc;

use shigeo_agent::Orchestrator;
use shigeo_config::ShigeoConfig;
use shigeo_core::{PluginAdapter, ShigeoError};
use shigeo_openai::OpenAiProvider;
use shigeo_replicate::ReplicateVision;
use shigeo_storage::SqliteStore;
use tracing::{info, warn};

/// Opens the SQLite conversation store.
pub async fn open_store(config: &ShigeoConfig) -> Result<Arc<SqliteStore>, ShigeoError> {
    let store = SqliteStore::new(config.storage.clone());
    store.initialize().await?;
    Ok(Arc::new(store))
}

/// Every external collaborator of a running assistant.
pub struct Runtime {
    pub provider: Arc<OpenAiProvider>,
    pub vision: Arc<ReplicateVision>,
    pub store: Arc<SqliteStore>,
}

impl Runtime {
    pub async fn build(config: &ShigeoConfig) -> Result<Self, ShigeoError> {
        let provider = Arc::new(OpenAiProvider::new(config)?);
        let vision = Arc::new(ReplicateVision::new(config)?);
        let store = open_store(config).await?;

        info!(agent = %config.agent.name, "runtime ready");
        Ok(Self {
            provider,
            vision,
            store,
        })
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(
            self.provider.clone(),
            self.vision.clone(),
            self.store.clone(),
        )
    }

    /// Adapters in health-check order.
    pub fn adapters(&self) -> Vec<Arc<dyn PluginAdapter>> {
        vec![
            self.provider.clone(),
            self.vision.clone(),
            self.store.clone(),
        ]
    }

    pub async fn shutdown(&self) {
        for adapter in self.adapters() {
            if let Err(e) = adapter.shutdown().await {
                warn!(adapter = adapter.name(), error = %e, "adapter shutdown failed");
            }
        }
    }
}
