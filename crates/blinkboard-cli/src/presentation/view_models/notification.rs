use std::fmt;

use blinkboard_types::Notification;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationRow {
    pub id: String,
    pub message: String,
    pub read: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationListViewModel {
    pub notifications: Vec<NotificationRow>,
    pub unread: usize,
}

impl NotificationListViewModel {
    /// Unread notifications float to the top, preserving relative order.
    pub fn new(notifications: &[Notification]) -> Self {
        let mut rows: Vec<NotificationRow> = notifications
            .iter()
            .map(|n| NotificationRow {
                id: n.id.clone(),
                message: n.message.clone(),
                read: n.read,
            })
            .collect();
        rows.sort_by_key(|row| row.read);

        let unread = rows.iter().filter(|row| !row.read).count();
        Self {
            notifications: rows,
            unread,
        }
    }
}

impl fmt::Display for NotificationListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.notifications.is_empty() {
            return writeln!(f, "No notifications.");
        }

        for notification in &self.notifications {
            let marker = if notification.read { " " } else { "*" };
            writeln!(f, "{} {:<4} {}", marker, notification.id, notification.message)?;
        }

        writeln!(f)?;
        writeln!(f, "{} unread", self.unread)
    }
}
