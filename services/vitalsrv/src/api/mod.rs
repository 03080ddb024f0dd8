//! HTTP API surface

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::engine::VitalsSampler;
use crate::notify::NotificationCenter;
use crate::presence::PresenceWatcher;

#[derive(Clone)]
pub struct AppState {
    pub sampler: Arc<VitalsSampler>,
    pub center: Arc<NotificationCenter>,
    pub presence: Arc<PresenceWatcher>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/vitals/current", get(handlers::current_vitals))
        .route("/api/vitals/history", get(handlers::vitals_history))
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            post(handlers::mark_notification_read),
        )
        .route("/api/presence/hidden", post(handlers::presence_hidden))
        .route("/api/presence/visible", post(handlers::presence_visible))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
