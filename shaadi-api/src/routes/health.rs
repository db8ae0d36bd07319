use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use shaadi_shared::types::api::{HealthCheck, HealthResponse, HealthStatus};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_check = match state.store.ping() {
        Ok(()) => HealthCheck {
            name: state.store.backend().to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(e) => HealthCheck {
            name: state.store.backend().to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    };

    let response = HealthResponse::healthy("shaadi-api", env!("CARGO_PKG_VERSION"))
        .with_checks(vec![store_check]);
    let status = if response.status == HealthStatus::Unhealthy {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status, Json(response))
}

/// Prometheus exposition. Empty when no recorder is installed.
pub async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}
