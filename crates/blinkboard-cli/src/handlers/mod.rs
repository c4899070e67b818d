pub mod blink_create;
pub mod blink_find;
pub mod blink_list;
pub mod commerce;
pub mod dashboard;
pub mod governance;
pub mod leaderboard;
pub mod market;
pub mod notifications;
pub mod stake;
pub mod swap;
pub mod transactions;

use blinkboard_engine::NotificationSink;

/// Sink that prints confirmations to stderr, keeping stdout clean for
/// pipeable command output.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, title: &str, body: &str) {
        eprintln!("{}: {}", title, body);
    }
}
