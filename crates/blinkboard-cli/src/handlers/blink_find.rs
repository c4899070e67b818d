use std::io::BufRead;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_engine::{ListView, SearchDebouncer};

/// Interactive search: each stdin line is a refinement of the search term.
/// Lines arriving within one quiet interval coalesce, so only the final
/// term of a burst is applied.
pub fn handle(client: &Client, page_size: usize, debounce: Duration) -> Result<()> {
    let blinks = client.blinks().list()?;
    let view = Arc::new(Mutex::new(ListView::new(blinks, page_size)?));

    let (debouncer, terms) = SearchDebouncer::channel(debounce)?;

    let consumer_view = Arc::clone(&view);
    let consumer = std::thread::spawn(move || {
        for term in terms {
            let mut view = consumer_view.lock().unwrap();
            view.apply_search(&term);

            let stats = view.stats();
            println!("\"{}\": {} of {} match", term, stats.filtered, stats.total);
            for blink in view.visible_slice() {
                println!("  {} {}", blink.id, blink.name);
            }
        }
    });

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        debouncer.submit(line?.trim());
    }

    // Give the final burst its quiet interval before shutting down, since
    // dropping the debouncer discards whatever is still pending.
    std::thread::sleep(debounce + Duration::from_millis(50));
    drop(debouncer);
    let _ = consumer.join();

    Ok(())
}
