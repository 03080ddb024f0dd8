//! Vitals Service (vitalsrv)
//!
//! Simulated real-time wellness engine: a periodic vitals sampler, a set of
//! independent reminder timers, an in-memory notification center with a
//! best-effort system-notification side channel, and a visibility-aware
//! re-engagement watcher, all exposed over an axum HTTP API.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod presence;
pub mod response;

pub use config::Config;
pub use error::{ApiError, ApiResult};
