// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Shigeo assistant.
//!
//! Accepts a photo plus a question as a multipart form, stores the photo as
//! the user's current image, and answers through the orchestrator.

pub mod handlers;
pub mod ingest;
pub mod server;

pub use handlers::{AnswerResponse, ErrorResponse, HealthResponse};
pub use ingest::{ImageStore, validate_user_id};
pub use server::{GatewayState, ServerConfig, router, start_server};
