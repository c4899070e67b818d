/// Destination for user-visible confirmations ("Blink Created",
/// "Search Results: 3 matches").
///
/// Injected into the view instead of reached as an ambient global so tests
/// can record what the user would have seen.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Sink that discards everything. Default when no sink is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _title: &str, _body: &str) {}
}
