//! Exporter HTTP routes — webhook intake, scrape endpoint, readiness probe.

pub mod webhook;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::error::WebhookError;
use crate::metrics::PrometheusRunMetrics;
use crate::services::run_ledger::RunLedger;

/// Shared state for exporter route handlers.
#[derive(Clone)]
pub struct ExporterState {
    pub ledger: Arc<RunLedger<PrometheusRunMetrics>>,
    pub prometheus: PrometheusHandle,
}

impl ExporterState {
    /// Fresh aggregates; everything starts at zero.
    pub fn new() -> Self {
        let metrics = PrometheusRunMetrics::new();
        let prometheus = metrics.handle();
        Self {
            ledger: Arc::new(RunLedger::new(metrics)),
            prometheus,
        }
    }
}

impl Default for ExporterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the exporter's Axum router.
pub fn exporter_router(state: ExporterState) -> Router {
    Router::new()
        .route("/webhook", post(webhook_handler))
        .route("/metrics", get(metrics_handler))
        // Probe path spelling is part of the deployed contract.
        .route("/readyness", get(readiness_handler))
        .with_state(state)
}

// ── Webhook ──

async fn webhook_handler(
    State(state): State<ExporterState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<&'static str, WebhookError> {
    let body = body.map_err(|e| {
        tracing::warn!("Failed to read webhook body: {e}");
        WebhookError::BodyRead(e.body_text())
    })?;

    webhook::handle_webhook(&state.ledger, &body)
}

// ── Scrape ──

async fn metrics_handler(State(state): State<ExporterState>) -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        state.prometheus.render(),
    )
}

// ── Probes ──

async fn readiness_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
