// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that every collaborator adapter implements.

use async_trait::async_trait;

use crate::error::ShigeoError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all Shigeo adapters.
///
/// Provides identity, lifecycle, and health check capabilities so the
/// gateway can report on every collaborator uniformly.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns which collaborator this adapter fronts.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, ShigeoError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), ShigeoError>;
}
