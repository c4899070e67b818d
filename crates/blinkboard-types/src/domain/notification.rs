use serde::{Deserialize, Serialize};

/// A user-visible notification ("New follower", "Your blink was liked").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub read: bool,
}

impl Notification {
    pub fn unread(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            read: false,
        }
    }
}
