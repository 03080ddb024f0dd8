//! API Gateway (gateway)
//!
//! Thin proxy in front of the upstream CamVitals API. It does two things:
//! short-circuits logins for one reserved local account, and forwards
//! everything else upstream while normalizing failure bodies for the client.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub use config::Config;
pub use error::GatewayError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: reqwest::Client,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth/login", post(handlers::login))
        .route("/chatbot/message", post(handlers::chatbot_message))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::AUTHORIZATION,
                ]),
        )
        .with_state(state)
}
