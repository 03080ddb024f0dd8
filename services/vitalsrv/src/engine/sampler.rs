//! Periodic vitals sampler
//!
//! One tokio task drives the generator on a fixed cadence and maintains the
//! current reading plus a bounded FIFO history window. Cancellation goes
//! through a `CancellationToken` rather than a bare task handle: a tick that
//! was already queued when `stop()` ran re-checks the token and bails before
//! touching state.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use camvitals_model::{NotificationCategory, NotificationEvent, Severity, VitalsReading};
use chrono::Utc;
use parking_lot::RwLock;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::generator::generate_reading;
use crate::notify::EventSink;

/// Raise a warning notification when heart rate exceeds the threshold.
#[derive(Debug, Clone, Copy)]
pub struct HeartRateAlert {
    pub threshold: u32,
}

#[derive(Debug, Clone)]
pub struct SamplerSettings {
    pub interval: Duration,
    pub history_cap: usize,
    pub alert: Option<HeartRateAlert>,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            history_cap: 24,
            alert: Some(HeartRateAlert { threshold: 85 }),
        }
    }
}

#[derive(Default)]
struct SamplerState {
    current: Option<VitalsReading>,
    history: VecDeque<VitalsReading>,
}

struct Inner {
    settings: SamplerSettings,
    state: RwLock<SamplerState>,
    sink: Arc<dyn EventSink>,
}

impl Inner {
    fn ingest<R: Rng + ?Sized>(&self, rng: &mut R) {
        let reading = generate_reading(rng, Utc::now());

        if let Some(alert) = &self.settings.alert {
            if reading.heart_rate > alert.threshold {
                self.sink.deliver(NotificationEvent::new(
                    rng,
                    Utc::now(),
                    NotificationCategory::HeartRateAlert,
                    "Heart Rate Alert",
                    format!(
                        "Heart rate is {} BPM, above threshold of {} BPM",
                        reading.heart_rate, alert.threshold
                    ),
                    Severity::Warning,
                ));
            }
        }

        let mut state = self.state.write();
        state.history.push_back(reading.clone());
        while state.history.len() > self.settings.history_cap {
            state.history.pop_front();
        }
        state.current = Some(reading);
    }
}

pub struct VitalsSampler {
    inner: Arc<Inner>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl VitalsSampler {
    pub fn new(settings: SamplerSettings, sink: Arc<dyn EventSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                settings,
                state: RwLock::new(SamplerState::default()),
                sink,
            }),
            cancel: Mutex::new(None),
        }
    }

    /// Begin sampling. A no-op while already running; restarting after
    /// `stop()` is allowed. The first reading is generated synchronously so
    /// `current()` is populated immediately.
    pub async fn start(&self) {
        let mut cancel = self.cancel.lock().await;
        if cancel.is_some() {
            return;
        }

        let mut rng = StdRng::from_entropy();
        self.inner.ingest(&mut rng);

        let token = CancellationToken::new();
        tokio::spawn(run(Arc::clone(&self.inner), token.clone(), rng));
        *cancel = Some(token);

        info!(
            interval_ms = self.inner.settings.interval.as_millis() as u64,
            history_cap = self.inner.settings.history_cap,
            "vitals sampler started"
        );
    }

    /// Stop sampling. Idempotent; no tick runs after this returns.
    pub async fn stop(&self) {
        if let Some(token) = self.cancel.lock().await.take() {
            token.cancel();
            debug!("vitals sampler stopped");
        }
    }

    pub fn current(&self) -> Option<VitalsReading> {
        self.inner.state.read().current.clone()
    }

    /// History window, oldest to newest, at most `history_cap` entries.
    pub fn history(&self) -> Vec<VitalsReading> {
        self.inner.state.read().history.iter().cloned().collect()
    }
}

async fn run(inner: Arc<Inner>, token: CancellationToken, mut rng: StdRng) {
    let period = inner.settings.interval;
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                // A tick can be queued before cancellation lands.
                if token.is_cancelled() {
                    break;
                }
                inner.ingest(&mut rng);
            }
        }
    }
}
