//! HTTP API exposing the system info snapshot.

mod sys;

use axum::{Router, http::StatusCode, routing::get};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::sys::SystemInfoProvider;

#[derive(Debug, Error)]
pub enum ApiServerError {
    #[error("failed to bind to address: {0}")]
    Bind(std::io::Error),
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

pub struct ApiServer {
    router: Router,
    socket: SocketAddr,
    shutdown: CancellationToken,
}

impl ApiServer {
    pub fn new(
        socket: SocketAddr,
        request_timeout: Duration,
        provider: Arc<SystemInfoProvider>,
        shutdown: CancellationToken,
    ) -> ApiServer {
        ApiServer {
            router: router(provider, request_timeout),
            socket,
            shutdown,
        }
    }

    pub async fn serve(self) -> Result<(), ApiServerError> {
        let listener = TcpListener::bind(self.socket)
            .await
            .map_err(ApiServerError::Bind)?;

        info!(address = %self.socket, "API server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(self.shutdown))
            .await
            .map_err(ApiServerError::Serve)
    }
}

/// Build the router serving `GET /sys/info`.
pub fn router(provider: Arc<SystemInfoProvider>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/sys/info", get(sys::system_info))
        .layer((
            TraceLayer::new_for_http(),
            TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout),
        ))
        .with_state(provider)
}

async fn wait_for_shutdown(token: CancellationToken) {
    token.cancelled().await;
    info!("shutting down API server");
}
