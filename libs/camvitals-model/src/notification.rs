//! Notification events and reminder configuration

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ids::event_id;

/// Severity shown next to an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
}

/// Source category of a notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Break,
    WellnessCheck,
    Hydration,
    PostureCheck,
    ReEngagement,
    HeartRateAlert,
}

/// One in-app notification.
///
/// Appended newest-first to the notification center; the only mutation ever
/// applied afterwards is the idempotent mark-as-read transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: NotificationCategory,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub severity: Severity,
}

impl NotificationEvent {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<Utc>,
        category: NotificationCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: event_id(now, rng),
            title: title.into(),
            description: description.into(),
            category,
            timestamp: now,
            is_read: false,
            severity,
        }
    }
}

/// Configuration for one recurring reminder timer.
///
/// Each firing picks one entry of `descriptions` uniformly at random.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub category: NotificationCategory,
    pub title: String,
    pub severity: Severity,
    pub interval_ms: u64,
    pub descriptions: Vec<String>,
}

impl ReminderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// The stock reminder set: break every 30 minutes, wellness check every
    /// 2 hours, hydration every 45 minutes, posture check every hour.
    pub fn defaults() -> Vec<ReminderConfig> {
        vec![
            ReminderConfig {
                category: NotificationCategory::Break,
                title: "Time for a Break".to_string(),
                severity: Severity::Warning,
                interval_ms: 30 * 60 * 1000,
                descriptions: vec![
                    "Take a short break to stretch and move around".to_string(),
                    "Stand up and take a quick walk".to_string(),
                    "Rest your eyes for a few minutes".to_string(),
                ],
            },
            ReminderConfig {
                category: NotificationCategory::WellnessCheck,
                title: "Wellness Check".to_string(),
                severity: Severity::Info,
                interval_ms: 2 * 60 * 60 * 1000,
                descriptions: vec![
                    "Time for your wellness assessment".to_string(),
                    "How are you feeling right now?".to_string(),
                    "Check in with your stress levels".to_string(),
                ],
            },
            ReminderConfig {
                category: NotificationCategory::Hydration,
                title: "Hydration Reminder".to_string(),
                severity: Severity::Info,
                interval_ms: 45 * 60 * 1000,
                descriptions: vec![
                    "Remember to stay hydrated".to_string(),
                    "Time to drink some water".to_string(),
                    "Take a water break".to_string(),
                ],
            },
            ReminderConfig {
                category: NotificationCategory::PostureCheck,
                title: "Posture Check".to_string(),
                severity: Severity::Info,
                interval_ms: 60 * 60 * 1000,
                descriptions: vec![
                    "Check your sitting posture".to_string(),
                    "Adjust your screen height if needed".to_string(),
                    "Relax your shoulders".to_string(),
                ],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_event_starts_unread() {
        let mut rng = StdRng::seed_from_u64(1);
        let event = NotificationEvent::new(
            &mut rng,
            Utc::now(),
            NotificationCategory::Break,
            "Time for a Break",
            "Stand up and take a quick walk",
            Severity::Warning,
        );
        assert!(!event.is_read);
        assert!(!event.id.is_empty());
    }

    #[test]
    fn default_reminders_cover_all_stock_categories() {
        let reminders = ReminderConfig::defaults();
        assert_eq!(reminders.len(), 4);
        for reminder in &reminders {
            assert!(!reminder.descriptions.is_empty());
            assert!(reminder.interval_ms > 0);
        }
        let break_reminder = reminders
            .iter()
            .find(|r| r.category == NotificationCategory::Break)
            .unwrap();
        assert_eq!(break_reminder.interval_ms, 1_800_000);
        assert_eq!(break_reminder.severity, Severity::Warning);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
