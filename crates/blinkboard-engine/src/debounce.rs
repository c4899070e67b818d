use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::Result;

enum Command {
    Submit(String),
    Shutdown,
}

/// Cancellable quiet-interval timer for search input.
///
/// Each [`submit`](SearchDebouncer::submit) supersedes any pending term; the
/// worker fires only once input pauses for the configured interval, so rapid
/// keystrokes coalesce into a single recomputation. Dropping the debouncer
/// shuts the worker down without firing.
pub struct SearchDebouncer {
    tx: Sender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Spawn a worker that invokes `on_fire` with the final term after each
    /// quiet interval.
    pub fn new<F>(quiet: Duration, on_fire: F) -> Result<Self>
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, rx) = channel::<Command>();

        let handle = std::thread::Builder::new()
            .name("search-debounce".to_string())
            .spawn(move || {
                let mut pending: Option<String> = None;

                loop {
                    let command = if pending.is_some() {
                        match rx.recv_timeout(quiet) {
                            Ok(command) => command,
                            Err(RecvTimeoutError::Timeout) => {
                                if let Some(term) = pending.take() {
                                    on_fire(term);
                                }
                                continue;
                            }
                            Err(RecvTimeoutError::Disconnected) => break,
                        }
                    } else {
                        match rx.recv() {
                            Ok(command) => command,
                            Err(_) => break,
                        }
                    };

                    match command {
                        Command::Submit(term) => pending = Some(term),
                        Command::Shutdown => break,
                    }
                }
            })?;

        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    /// Spawn a worker that delivers final terms over a channel, for callers
    /// driving an event loop instead of a callback.
    pub fn channel(quiet: Duration) -> Result<(Self, Receiver<String>)> {
        let (term_tx, term_rx) = channel();
        let debouncer = Self::new(quiet, move |term| {
            let _ = term_tx.send(term);
        })?;
        Ok((debouncer, term_rx))
    }

    /// Schedule `term` for recomputation, superseding any pending term.
    pub fn submit(&self, term: impl Into<String>) {
        let _ = self.tx.send(Command::Submit(term.into()));
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread::sleep;

    const QUIET: Duration = Duration::from_millis(25);
    const SETTLE: Duration = Duration::from_millis(150);

    #[test]
    fn test_fires_after_quiet_interval() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debouncer = SearchDebouncer::new(QUIET, move |term| {
            sink.lock().unwrap().push(term);
        })
        .unwrap();

        debouncer.submit("bark");
        sleep(SETTLE);

        assert_eq!(*fired.lock().unwrap(), vec!["bark".to_string()]);
    }

    #[test]
    fn test_newer_term_supersedes_pending_one() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debouncer = SearchDebouncer::new(QUIET, move |term| {
            sink.lock().unwrap().push(term);
        })
        .unwrap();

        // All submitted well within one quiet interval; only the last fires.
        debouncer.submit("b");
        debouncer.submit("ba");
        debouncer.submit("bark");
        sleep(SETTLE);

        assert_eq!(*fired.lock().unwrap(), vec!["bark".to_string()]);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debouncer = SearchDebouncer::new(QUIET, move |term| {
            sink.lock().unwrap().push(term);
        })
        .unwrap();

        debouncer.submit("first");
        sleep(SETTLE);
        debouncer.submit("second");
        sleep(SETTLE);

        assert_eq!(
            *fired.lock().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_drop_discards_pending_term() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debouncer = SearchDebouncer::new(Duration::from_secs(60), move |term: String| {
            sink.lock().unwrap().push(term);
        })
        .unwrap();

        debouncer.submit("never");
        drop(debouncer);

        assert!(fired.lock().unwrap().is_empty());
    }

    #[test]
    fn test_channel_variant_delivers_terms() {
        let (debouncer, terms) = SearchDebouncer::channel(QUIET).unwrap();

        debouncer.submit("bark");
        let term = terms.recv_timeout(SETTLE).unwrap();

        assert_eq!(term, "bark");
    }
}
