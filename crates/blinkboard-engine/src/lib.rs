// Engine module - list view derivation (search, sort, paginate)
// This layer sits between fetched record collections (client) and presentation

mod debounce;
mod error;
mod list_view;
mod sink;
mod stats;

pub use debounce::SearchDebouncer;
pub use error::{Error, Result};
pub use list_view::ListView;
pub use sink::{NotificationSink, NullSink};
pub use stats::ViewStats;

// Façade API - how the two halves of debounced search compose.
//
// `ListView::apply_search` is the recomputation half: it filters, resets the
// page, and reports the match count. `SearchDebouncer` is the timing half:
// `submit(term)` supersedes any pending term and delivers the final one after
// the quiet interval. The caller's event loop wires them together:
//
//   let (debouncer, terms) = SearchDebouncer::channel(Duration::from_millis(300))?;
//   debouncer.submit(user_input);            // on every keystroke
//   while let Ok(term) = terms.recv() {
//       view.apply_search(&term);            // once input pauses
//   }
