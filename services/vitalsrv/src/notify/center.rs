//! In-memory notification center
//!
//! Ordered newest-first; capped so the list cannot grow without bound.

use std::collections::VecDeque;
use std::sync::Arc;

use camvitals_model::NotificationEvent;
use parking_lot::RwLock;
use tracing::{debug, info};

use super::{EventSink, NotifyCapability, SystemNotifier};

pub struct NotificationCenter {
    events: RwLock<VecDeque<NotificationEvent>>,
    cap: usize,
    notifier: Arc<dyn SystemNotifier>,
}

impl NotificationCenter {
    pub fn new(cap: usize, notifier: Arc<dyn SystemNotifier>) -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            cap: cap.max(1),
            notifier,
        }
    }

    /// Snapshot in reverse-chronological order.
    pub fn list(&self, unread_only: bool) -> Vec<NotificationEvent> {
        let events = self.events.read();
        events
            .iter()
            .filter(|e| !unread_only || !e.is_read)
            .cloned()
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.events.read().iter().filter(|e| !e.is_read).count()
    }

    /// Mark an event read. Returns `None` for an unknown id, `Some(true)` on
    /// the first transition, `Some(false)` when it was already read.
    pub fn mark_read(&self, id: &str) -> Option<bool> {
        let mut events = self.events.write();
        let event = events.iter_mut().find(|e| e.id == id)?;
        let changed = !event.is_read;
        event.is_read = true;
        Some(changed)
    }
}

impl EventSink for NotificationCenter {
    fn deliver(&self, event: NotificationEvent) {
        info!(
            category = ?event.category,
            title = %event.title,
            "notification"
        );

        {
            let mut events = self.events.write();
            events.push_front(event.clone());
            while events.len() > self.cap {
                events.pop_back();
            }
        }

        // Side channel only; a refused or failed system notification must
        // never affect the in-app event.
        if self.notifier.capability() == NotifyCapability::Available {
            if let Err(err) = self.notifier.raise(&event) {
                debug!("system notification failed: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::system::NotifyError;
    use camvitals_model::{NotificationCategory, Severity};
    use chrono::Utc;
    use rand::{rngs::StdRng, SeedableRng};

    struct FailingNotifier;

    impl SystemNotifier for FailingNotifier {
        fn capability(&self) -> NotifyCapability {
            NotifyCapability::Available
        }

        fn raise(&self, _event: &NotificationEvent) -> Result<(), NotifyError> {
            Err(NotifyError::Raise("no display".to_string()))
        }
    }

    fn event(rng: &mut StdRng, title: &str) -> NotificationEvent {
        NotificationEvent::new(
            rng,
            Utc::now(),
            NotificationCategory::Hydration,
            title,
            "Time to drink some water",
            Severity::Info,
        )
    }

    fn center(cap: usize) -> NotificationCenter {
        NotificationCenter::new(cap, Arc::new(crate::notify::LogNotifier::default()))
    }

    #[test]
    fn newest_first_with_cap_eviction() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = center(2);

        center.deliver(event(&mut rng, "first"));
        center.deliver(event(&mut rng, "second"));
        center.deliver(event(&mut rng, "third"));

        let listed = center.list(false);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "third");
        assert_eq!(listed[1].title, "second");
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(4);
        let center = center(8);
        center.deliver(event(&mut rng, "only"));

        let id = center.list(false)[0].id.clone();
        assert_eq!(center.mark_read(&id), Some(true));
        assert_eq!(center.mark_read(&id), Some(false));
        assert_eq!(center.mark_read("missing"), None);
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn unread_filter() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = center(8);
        center.deliver(event(&mut rng, "a"));
        center.deliver(event(&mut rng, "b"));

        let id = center.list(false)[1].id.clone();
        center.mark_read(&id);

        let unread = center.list(true);
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].title, "b");
    }

    #[test]
    fn failing_side_channel_does_not_block_delivery() {
        let mut rng = StdRng::seed_from_u64(6);
        let center = NotificationCenter::new(8, Arc::new(FailingNotifier));
        center.deliver(event(&mut rng, "still delivered"));
        assert_eq!(center.list(false).len(), 1);
    }
}
