use std::sync::Mutex;

use blinkboard_engine::NotificationSink;

/// Sink that records every notification for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(title, body)` pairs notified so far, in order.
    pub fn recorded(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, title: &str, body: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }
}
