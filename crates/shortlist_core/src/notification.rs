use std::time::Duration;

use crate::Effect;

pub type NotificationId = u64;

/// How long a notification stays up before it is dismissed automatically.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub level: NotificationLevel,
    pub message: String,
}

/// Newest-first list of transient notifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Notifications {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl Notifications {
    /// Show a notification and return the effect that schedules its dismissal.
    pub(crate) fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> Effect {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(
            0,
            Notification {
                id,
                level,
                message: message.into(),
            },
        );
        Effect::ScheduleDismiss {
            id,
            after: NOTIFICATION_TTL,
        }
    }

    /// Returns false if the notification was already gone.
    pub(crate) fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub(crate) fn items(&self) -> &[Notification] {
        &self.items
    }
}
