//! Notification delivery: in-app center and system side channel

pub mod center;
pub mod system;

use camvitals_model::NotificationEvent;

pub use center::NotificationCenter;
pub use system::{LogNotifier, NotifyCapability, SystemNotifier};

/// A registered consumer of emitted notification events.
///
/// Delivery must be quick and infallible; slow or failing side effects belong
/// behind [`SystemNotifier`], not here.
pub trait EventSink: Send + Sync {
    fn deliver(&self, event: NotificationEvent);
}
