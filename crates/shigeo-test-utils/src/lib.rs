// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Shigeo integration tests.
//!
//! - [`MockProvider`] - scripted LLM completions, records requests
//! - [`MockVision`] - scripted VQA answers, records requests
//! - [`InMemoryStore`] - conversation store with failure injection
//! - [`TestHarness`] - orchestrator wired over all three

pub mod harness;
pub mod memory_store;
pub mod mock_provider;
pub mod mock_vision;

pub use harness::{TEST_IMAGE, TestHarness, TestHarnessBuilder};
pub use memory_store::InMemoryStore;
pub use mock_provider::MockProvider;
pub use mock_vision::MockVision;
