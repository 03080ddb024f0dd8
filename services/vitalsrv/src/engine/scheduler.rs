//! Reminder scheduler
//!
//! One independently cancellable timer task per reminder category. Timers do
//! not coordinate: firings may land in any order and overlap in time. The
//! first firing happens one full interval after `start()`, never at t=0.

use std::sync::Arc;

use camvitals_model::{NotificationEvent, ReminderConfig};
use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::notify::EventSink;

pub struct ReminderScheduler {
    sink: Arc<dyn EventSink>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl ReminderScheduler {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            cancel: Mutex::new(None),
        }
    }

    /// Spawn one timer per config. A no-op while already running.
    pub async fn start(&self, configs: Vec<ReminderConfig>) {
        let mut cancel = self.cancel.lock().await;
        if cancel.is_some() {
            return;
        }

        let token = CancellationToken::new();
        let mut spawned = 0usize;
        for config in configs {
            if config.descriptions.is_empty() || config.interval_ms == 0 {
                warn!(category = ?config.category, "skipping misconfigured reminder");
                continue;
            }
            tokio::spawn(run_reminder(
                config,
                Arc::clone(&self.sink),
                token.child_token(),
            ));
            spawned += 1;
        }
        *cancel = Some(token);

        info!(timers = spawned, "reminder scheduler started");
    }

    /// Cancel all timers. Idempotent and safe when never started; no event
    /// is delivered after this returns.
    pub async fn stop(&self) {
        if let Some(token) = self.cancel.lock().await.take() {
            token.cancel();
            debug!("reminder scheduler stopped");
        }
    }
}

async fn run_reminder(config: ReminderConfig, sink: Arc<dyn EventSink>, token: CancellationToken) {
    let mut rng = StdRng::from_entropy();
    let period = config.interval();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                if token.is_cancelled() {
                    break;
                }
                let description =
                    config.descriptions[rng.gen_range(0..config.descriptions.len())].clone();
                sink.deliver(NotificationEvent::new(
                    &mut rng,
                    Utc::now(),
                    config.category,
                    config.title.clone(),
                    description,
                    config.severity,
                ));
            }
        }
    }
}
