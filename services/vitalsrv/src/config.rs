//! Service configuration
//!
//! Loaded from an optional `config/vitalsrv` file with `VITALSRV_*`
//! environment overrides; every field has a serde default so the service
//! starts with no configuration present.

use camvitals_model::ReminderConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub presence: PresenceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SamplerConfig {
    /// Live-dashboard refresh cadence.
    #[serde(default = "default_sample_interval_ms")]
    pub interval_ms: u64,
    /// "Last N samples" window retained for the history view.
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Heart rate above this raises a warning notification. Clamped to
    /// [60,200] BPM at load, matching the dashboard's input limits.
    #[serde(default = "default_heart_rate_threshold")]
    pub heart_rate_threshold: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Most-recent events retained; older entries are evicted.
    #[serde(default = "default_notification_cap")]
    pub cap: usize,
    /// Reminder timers; omitted means the stock reminder set.
    #[serde(default)]
    pub reminders: Option<Vec<ReminderConfig>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresenceConfig {
    /// Background time beyond this triggers a re-engagement notification.
    #[serde(default = "default_presence_threshold_ms")]
    pub threshold_ms: u64,
    /// Where the hidden-at timestamp is persisted across restarts.
    #[serde(default = "default_presence_state_path")]
    pub state_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8091
}

fn default_sample_interval_ms() -> u64 {
    2000
}

fn default_history_cap() -> usize {
    24
}

fn default_true() -> bool {
    true
}

fn default_heart_rate_threshold() -> u32 {
    85
}

fn default_notification_cap() -> usize {
    200
}

fn default_presence_threshold_ms() -> u64 {
    60 * 60 * 1000
}

fn default_presence_state_path() -> String {
    "data/presence.json".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_sample_interval_ms(),
            history_cap: default_history_cap(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            heart_rate_threshold: default_heart_rate_threshold(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cap: default_notification_cap(),
            reminders: None,
        }
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            threshold_ms: default_presence_threshold_ms(),
            state_path: default_presence_state_path(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/vitalsrv").required(false))
            .add_source(config::Environment::with_prefix("VITALSRV").separator("_"))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;
        cfg.alerts.heart_rate_threshold = cfg.alerts.heart_rate_threshold.clamp(60, 200);
        Ok(cfg)
    }

    /// Reminder timers to run: configured set, or the stock defaults.
    pub fn reminders(&self) -> Vec<ReminderConfig> {
        self.notifications
            .reminders
            .clone()
            .unwrap_or_else(ReminderConfig::defaults)
    }
}
