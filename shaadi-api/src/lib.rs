use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::{middleware, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shaadi_shared::types::auth::JwtKeys;

pub mod config;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
pub mod store;

use store::Store;

/// Everything a handler can reach. Cheap to clone.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt: JwtKeys,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt: JwtKeys) -> Self {
        Self {
            store,
            jwt,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        .route("/login", post(routes::login::login))
        .route(
            "/profiles",
            post(routes::profile::create_profile).get(routes::profile::list_profiles),
        )
        .route(
            "/profiles/:id",
            get(routes::profile::get_profile)
                .put(routes::profile::update_profile)
                .delete(routes::profile::delete_profile),
        )
        // Bearer token required from here on (AuthUser extractor)
        .route("/matches", get(routes::matches::get_matches))
        .route("/like/:id", post(routes::likes::like_profile))
        .route("/likes", get(routes::likes::list_likes))
        .route("/getUserDetails", get(routes::me::get_user_details))
        .layer(middleware::from_fn(shaadi_shared::middleware::metrics_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
