//! Best-effort system-notification side channel

use std::time::Duration;

use camvitals_model::NotificationEvent;
use thiserror::Error;
use tracing::info;

/// How long a raised notification stays up before auto-dismissing.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Host support for system-level notifications, probed once and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyCapability {
    Available,
    Denied,
    Unsupported,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("system notifications denied")]
    Denied,
    #[error("system notifications unsupported on this host")]
    Unsupported,
    #[error("failed to raise notification: {0}")]
    Raise(String),
}

/// Transient OS-level notification channel.
///
/// Strictly best-effort: callers must treat any error as ignorable and never
/// let it affect in-app delivery. Implementations that can dismiss should do
/// so after [`AUTO_DISMISS`].
pub trait SystemNotifier: Send + Sync {
    fn capability(&self) -> NotifyCapability;

    fn raise(&self, event: &NotificationEvent) -> Result<(), NotifyError>;
}

/// Default notifier: surfaces events on the service log.
///
/// Headless deployments have no desktop notification surface, so the side
/// channel degrades to a structured log line.
pub struct LogNotifier {
    capability: NotifyCapability,
}

impl LogNotifier {
    pub fn new(capability: NotifyCapability) -> Self {
        Self { capability }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new(NotifyCapability::Available)
    }
}

impl SystemNotifier for LogNotifier {
    fn capability(&self) -> NotifyCapability {
        self.capability
    }

    fn raise(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        match self.capability {
            NotifyCapability::Available => {
                info!(
                    title = %event.title,
                    description = %event.description,
                    dismiss_after_secs = AUTO_DISMISS.as_secs(),
                    "system notification"
                );
                Ok(())
            }
            NotifyCapability::Denied => Err(NotifyError::Denied),
            NotifyCapability::Unsupported => Err(NotifyError::Unsupported),
        }
    }
}
