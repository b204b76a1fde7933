//! HTTP transport for the depth chart.
//!
//! - `controller`: axum handlers, one per endpoint
//! - `router`: route table
//! - `state`: shared application state

pub mod controller;
pub mod router;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{commands::DepthChartService, Result};

use state::AppState;

/// Router with state attached, ready to serve.
pub fn app(depth_chart: DepthChartService) -> Router {
    router::router().with_state(AppState::new(depth_chart))
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, depth_chart: DepthChartService) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Depth chart server listening on {}", listener.local_addr()?);

    axum::serve(listener, app(depth_chart))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Depth chart server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
