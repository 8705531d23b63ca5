//! HTTP server setup and handlers.
//!
//! # Responsibilities
//! - Create the Axum router for the trigger and status routes
//! - Wire up middleware (request timeout, tracing)
//! - Serve with graceful shutdown
//! - Translate `CheckOutcome` / `MonitorError` into response bodies

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::MonitorConfig;
use crate::http::response::{CheckSummary, FaultBody, ServiceStatus, SkippedSummary};
use crate::monitor::{CheckOutcome, Monitor};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub monitor: Arc<Monitor>,
}

/// HTTP server exposing the trigger interface.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: &MonitorConfig, monitor: Arc<Monitor>) -> Self {
        let state = AppState { monitor };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The request timeout must cover the probe's worst case
    /// (max_attempts × per-attempt deadline plus the backoffs between
    /// them); validation keeps the default configuration inside it.
    fn build_router(config: &MonitorConfig, state: AppState) -> Router {
        Router::new()
            .route("/check", get(check_handler))
            .route("/status", get(status_handler))
            .route("/", get(status_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Trigger handler: run one gated check.
///
/// A failing probe is a successful invocation of the checker, so it returns
/// 200 with `success: false`. Only a fault in the monitor itself maps to
/// 500, keeping "target is down" and "checker is broken" distinguishable at
/// the boundary.
async fn check_handler(State(state): State<AppState>) -> Response {
    match state.monitor.check().await {
        Ok(CheckOutcome::Skipped { timestamp }) => {
            Json(SkippedSummary::new(timestamp)).into_response()
        }
        Ok(CheckOutcome::Completed { result, logs_count }) => {
            Json(CheckSummary::new(result, logs_count)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "infrastructure fault during check");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FaultBody::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Static status description of the service.
async fn status_handler(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        target: state.monitor.config().target.url.clone(),
        logs_count: state.monitor.logs_count(),
    })
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
    } else {
        tracing::info!("shutdown signal received");
    }
}
