// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the external collaborators of the assistant.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod provider;
pub mod store;
pub mod vision;

pub use adapter::PluginAdapter;
pub use provider::ProviderAdapter;
pub use store::ConversationStore;
pub use vision::VisionAdapter;
