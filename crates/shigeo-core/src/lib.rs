// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Shigeo assistant.
//!
//! This crate provides the trait definitions, error type, and common types
//! shared by every crate in the workspace. Each external collaborator (LLM
//! provider, vision model, conversation store) is reached through a trait
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

pub use error::ShigeoError;
pub use types::{
    AdapterType, ConversationTurn, HealthStatus, ImageReference, ProviderMessage,
    ProviderRequest, ProviderResponse, Role, TokenUsage, UserId, VisionRequest,
};

pub use traits::{ConversationStore, PluginAdapter, ProviderAdapter, VisionAdapter};
