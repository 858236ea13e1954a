// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HashMap-backed conversation store with failure injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use shigeo_core::{
    AdapterType, ConversationStore, HealthStatus, PluginAdapter, ShigeoError, UserId,
};

/// In-memory [`ConversationStore`] for tests.
///
/// Payloads can be planted directly to simulate corrupt storage, and reads
/// or writes can be switched to fail. Every key touched is recorded.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<UserId, String>>,
    touched: Mutex<Vec<UserId>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `payload` verbatim, bypassing serialization.
    pub async fn plant_raw(&self, user: &UserId, payload: &str) {
        self.entries
            .lock()
            .await
            .insert(user.clone(), payload.to_string());
    }

    /// Raw payload currently stored for `user`.
    pub async fn raw(&self, user: &UserId) -> Option<String> {
        self.entries.lock().await.get(user).cloned()
    }

    /// Users passed to `get` or `put`, in call order.
    pub async fn touched(&self) -> Vec<UserId> {
        self.touched.lock().await.clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PluginAdapter for InMemoryStore {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for InMemoryStore {
    async fn get(&self, user: &UserId) -> Result<Option<String>, ShigeoError> {
        self.touched.lock().await.push(user.clone());
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ShigeoError::Storage {
                source: "injected read failure".into(),
            });
        }
        Ok(self.entries.lock().await.get(user).cloned())
    }

    async fn put(&self, user: &UserId, payload: &str) -> Result<(), ShigeoError> {
        self.touched.lock().await.push(user.clone());
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ShigeoError::Storage {
                source: "injected write failure".into(),
            });
        }
        self.entries
            .lock()
            .await
            .insert(user.clone(), payload.to_string());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserId>, ShigeoError> {
        let mut users: Vec<UserId> = self.entries.lock().await.keys().cloned().collect();
        users.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(users)
    }
}
