// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shigeo serve` command implementation.
//!
//! Builds the adapters and runs the HTTP gateway until SIGINT or SIGTERM.

use std::sync::Arc;

use shigeo_config::ShigeoConfig;
use shigeo_core::ShigeoError;
use shigeo_gateway::{GatewayState, ImageStore, ServerConfig};
use tracing::{info, warn};

use crate::runtime::Runtime;

/// Runs the `shigeo serve` command.
pub async fn run_serve(config: ShigeoConfig) -> Result<(), ShigeoError> {
    info!("starting shigeo serve");

    let runtime = Runtime::build(&config).await?;
    let state = GatewayState {
        orchestrator: Arc::new(runtime.orchestrator()),
        images: ImageStore::new(&config.gateway.image_dir),
        adapters: Arc::new(runtime.adapters()),
    };
    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        max_upload_bytes: config.gateway.max_upload_bytes,
    };

    let result = shigeo_gateway::start_server(&server_config, state, shutdown_signal()).await;
    runtime.shutdown().await;
    result
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("received SIGINT (Ctrl+C), initiating shutdown"),
                    _ = sigterm.recv() => info!("received SIGTERM, initiating shutdown"),
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                ctrl_c.await;
                info!("received SIGINT (Ctrl+C), initiating shutdown");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await;
        info!("received Ctrl+C, initiating shutdown");
    }
}
