//! Notification log shared by the screens that publish or display notifications.
//!
//! A [NotificationStore] is created once at start-up and handed by reference
//! to whatever needs it. Publishing appends to the log and broadcasts to every
//! live subscriber; the log lives until [NotificationStore::clear] is called.

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::broadcast;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A single entry in the notification log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: OffsetDateTime,
}

/// An explicit, owned notification log with publish/subscribe.
#[derive(Debug)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    sender: broadcast::Sender<Notification>,
}

impl NotificationStore {
    /// Create an empty store.
    ///
    /// `capacity` bounds how many notifications a slow subscriber may lag
    /// behind before it starts missing them. It must be greater than zero.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));

        Self {
            notifications: Vec::new(),
            sender,
        }
    }

    /// Records a notification stamped with the current UTC time and sends it
    /// to every subscriber.
    pub fn publish(&mut self, kind: NotificationKind, message: impl Into<String>) -> &Notification {
        self.publish_at(kind, message, OffsetDateTime::now_utc())
    }

    /// Records a notification with an explicit timestamp and sends it to every
    /// subscriber.
    pub fn publish_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> &Notification {
        let notification = Notification {
            kind,
            message: message.into(),
            created_at,
        };

        // Sending only fails when nobody is subscribed, which is fine.
        let _ = self.sender.send(notification.clone());
        tracing::debug!("Published {:?} notification: {}", kind, notification.message);

        self.notifications.push(notification);
        &self.notifications[self.notifications.len() - 1]
    }

    /// Receives every notification published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// The notification log, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Empties the log. Subscribers stay subscribed.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}
