//! Visibility-aware re-engagement
//!
//! Tracks background/foreground transitions reported by the client. The
//! hidden-at timestamp is persisted to a small JSON state file so it survives
//! a full restart. A missing or unreadable state file means "never
//! backgrounded" and is not an error.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use camvitals_model::{NotificationCategory, NotificationEvent, Severity};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::notify::EventSink;

#[derive(Debug, Error)]
pub enum PresenceError {
    #[error("failed to persist presence state: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode presence state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct PresenceState {
    hidden_at_ms: i64,
}

pub struct PresenceWatcher {
    path: PathBuf,
    threshold_ms: u64,
    sink: Arc<dyn EventSink>,
    // Serializes file access between concurrent API calls.
    lock: Mutex<()>,
}

impl PresenceWatcher {
    pub fn new(path: impl Into<PathBuf>, threshold_ms: u64, sink: Arc<dyn EventSink>) -> Self {
        Self {
            path: path.into(),
            threshold_ms,
            sink,
            lock: Mutex::new(()),
        }
    }

    /// The page went to the background: persist the timestamp.
    pub fn record_hidden(&self, now: DateTime<Utc>) -> Result<(), PresenceError> {
        let _guard = self.lock.lock();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = PresenceState {
            hidden_at_ms: now.timestamp_millis(),
        };
        fs::write(&self.path, serde_json::to_vec(&state)?)?;
        debug!(hidden_at_ms = state.hidden_at_ms, "presence: backgrounded");
        Ok(())
    }

    /// The page came back to the foreground. Emits one re-engagement event
    /// when the background stretch exceeded the threshold; returns whether it
    /// did. Clears the stored timestamp in every case.
    pub fn record_visible(&self, now: DateTime<Utc>) -> Result<bool, PresenceError> {
        let _guard = self.lock.lock();
        let Some(hidden_at_ms) = self.load()? else {
            return Ok(false);
        };
        let _ = fs::remove_file(&self.path);

        let elapsed_ms = now.timestamp_millis() - hidden_at_ms;
        if elapsed_ms <= self.threshold_ms as i64 {
            return Ok(false);
        }

        info!(elapsed_ms, "presence: long background stretch, re-engaging");
        let mut rng = rand::thread_rng();
        self.sink.deliver(NotificationEvent::new(
            &mut rng,
            now,
            NotificationCategory::ReEngagement,
            "Welcome Back!",
            "Hope you had a good break. How are you feeling?",
            Severity::Info,
        ));
        Ok(true)
    }

    fn load(&self) -> Result<Option<i64>, PresenceError> {
        match fs::read(&self.path) {
            // A corrupt file reads as "no timestamp", not an error.
            Ok(bytes) => Ok(serde_json::from_slice::<PresenceState>(&bytes)
                .ok()
                .map(|s| s.hidden_at_ms)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
