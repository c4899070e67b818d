use std::sync::Arc;

use blinkboard_types::{Record, SortOrder};

use crate::error::{Error, Result};
use crate::sink::NotificationSink;
use crate::stats::ViewStats;

/// Maintains a record collection and exposes a derived, paginated, filtered,
/// sorted view for rendering.
///
/// The collection is seeded once and mutated only by [`append`] (create
/// flows, most-recent first) and [`replace`] (full refresh from a fetch).
/// Search and sort never touch the records themselves; they recompute an
/// index of visible positions. The view has a single always-ready state --
/// loading indicators belong to the data-fetch collaborator, not here.
///
/// [`append`]: ListView::append
/// [`replace`]: ListView::replace
pub struct ListView<R: Record> {
    records: Vec<R>,
    /// Indices into `records`, filtered by the search term, ordered by sort
    /// key.
    visible: Vec<usize>,
    search_term: String,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
    sink: Option<Arc<dyn NotificationSink>>,
}

impl<R: Record> ListView<R> {
    /// Seed a view. `page_size` must be positive; everything else about the
    /// collection is accepted as-is.
    pub fn new(records: Vec<R>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::Config("page size must be positive".to_string()));
        }

        let mut view = Self {
            records,
            visible: Vec::new(),
            search_term: String::new(),
            sort_order: SortOrder::default(),
            page: 0,
            page_size,
            sink: None,
        };
        view.recompute();
        Ok(view)
    }

    /// Attach a notification sink for search-result confirmations.
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Apply a search term: keep records where any searchable field contains
    /// the term case-insensitively, reset to page 0, and report the match
    /// count. The empty term restores the full collection.
    ///
    /// This is the recomputation half of debounced search; pair it with
    /// [`SearchDebouncer`](crate::SearchDebouncer) so rapid input coalesces
    /// into a single pass.
    pub fn apply_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page = 0;
        self.recompute();

        if !term.is_empty()
            && let Some(sink) = &self.sink
        {
            sink.notify(
                "Search Results",
                &format!("Found {} matching \"{}\"", self.visible.len(), term),
            );
        }
    }

    /// Change the ordering of the derived view. The page cursor is kept
    /// (clamped if the view shrank since it was set).
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.recompute();
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort_order(self.sort_order.toggled());
    }

    /// Advance the page cursor by one page, clamping to the last valid page.
    /// Callers showing a load-more affordance should gate it on
    /// [`has_more`](ListView::has_more), but calling past the end is a no-op
    /// rather than an error.
    pub fn next_page(&mut self) {
        self.page += 1;
        self.clamp_page();
    }

    /// Alias for [`next_page`](ListView::next_page) matching the dashboard's
    /// load-more flows.
    pub fn load_more(&mut self) {
        self.next_page();
    }

    /// Jump to a specific page, clamping out-of-range indices.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    /// Insert a new record at the front of the collection (most-recent-first
    /// create semantics) and reset to page 0 so it is immediately visible.
    pub fn append(&mut self, record: R) {
        self.records.insert(0, record);
        self.page = 0;
        self.recompute();
    }

    /// Replace the whole collection from a fresh fetch. The active search
    /// term is re-applied and the page cursor clamped.
    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
        self.recompute();
    }

    /// Records on the current page of the filtered+sorted view. An empty
    /// slice is a normal result, not an error.
    pub fn visible_slice(&self) -> Vec<&R> {
        let start = self.page * self.page_size;
        let end = ((self.page + 1) * self.page_size).min(self.visible.len());
        if start >= end {
            return Vec::new();
        }

        self.visible[start..end]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Whether pages beyond the current one exist
    /// (`visible count so far < filtered count`).
    pub fn has_more(&self) -> bool {
        (self.page + 1) * self.page_size < self.visible.len()
    }

    pub fn stats(&self) -> ViewStats {
        let sort_key_sum = self
            .visible
            .iter()
            .map(|&i| self.records[i].sort_key())
            .sum();

        ViewStats {
            total: self.records.len(),
            filtered: self.visible.len(),
            page: self.page,
            page_count: self.page_count(),
            page_size: self.page_size,
            visible: self.visible_slice().len(),
            sort_key_sum,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages over the filtered view: `ceil(filtered / page_size)`.
    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn recompute(&mut self) {
        let needle = self.search_term.to_lowercase();

        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle.is_empty()
                    || record
                        .searchable_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(|(i, _)| i)
            .collect();

        // Stable sort: equal keys keep insertion order in both directions,
        // so toggling the order twice restores the original tie order.
        let records = &self.records;
        match self.sort_order {
            SortOrder::Ascending => self
                .visible
                .sort_by(|&a, &b| records[a].sort_key().total_cmp(&records[b].sort_key())),
            SortOrder::Descending => self
                .visible
                .sort_by(|&a, &b| records[b].sort_key().total_cmp(&records[a].sort_key())),
        }

        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    struct Item {
        id: String,
        name: String,
        likes: f64,
    }

    impl Item {
        fn new(id: &str, name: &str, likes: f64) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                likes,
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn searchable_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }

        fn sort_key(&self) -> f64 {
            self.likes
        }

        fn created_at(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    fn ids<R: Record>(view: &ListView<R>) -> Vec<String> {
        view.visible_slice()
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = ListView::new(vec![Item::new("1", "a", 1.0)], 0);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_descending_pagination_matches_likes_example() {
        // likes 5, 20, 10 with page size 2: page 0 = [20, 10], page 1 = [5]
        let items = vec![
            Item::new("1", "a", 5.0),
            Item::new("2", "b", 20.0),
            Item::new("3", "c", 10.0),
        ];
        let mut view = ListView::new(items, 2).unwrap();

        assert_eq!(ids(&view), vec!["2", "3"]);
        assert!(view.has_more());

        view.next_page();
        assert_eq!(ids(&view), vec!["1"]);
        assert!(!view.has_more());
    }

    #[test]
    fn test_page_past_end_clamps_to_last_page() {
        let items = (0..5)
            .map(|i| Item::new(&i.to_string(), "x", i as f64))
            .collect();
        let mut view = ListView::new(items, 2).unwrap();

        view.set_page(99);
        assert_eq!(view.page(), 2);
        assert_eq!(view.visible_slice().len(), 1);

        view.next_page();
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_empty_view_yields_empty_slice_not_error() {
        let mut view = ListView::<Item>::new(Vec::new(), 3).unwrap();
        assert!(view.visible_slice().is_empty());
        assert_eq!(view.page_count(), 0);

        view.next_page();
        assert_eq!(view.page(), 0);
        assert!(view.visible_slice().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = vec![
            Item::new("1", "BARK #1", 1.0),
            Item::new("2", "Ethereum", 2.0),
            Item::new("3", "barkclub", 3.0),
        ];
        let mut view = ListView::new(items, 10).unwrap();

        view.apply_search("bark");
        let mut matched = ids(&view);
        matched.sort();
        assert_eq!(matched, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_term_restores_full_collection() {
        let items = vec![
            Item::new("1", "alpha", 1.0),
            Item::new("2", "beta", 2.0),
        ];
        let mut view = ListView::new(items, 10).unwrap();

        view.apply_search("alpha");
        assert_eq!(view.stats().filtered, 1);

        view.apply_search("");
        assert_eq!(view.stats().filtered, 2);
    }

    #[test]
    fn test_search_resets_page() {
        let items = (0..9)
            .map(|i| Item::new(&i.to_string(), "same", i as f64))
            .collect();
        let mut view = ListView::new(items, 3).unwrap();

        view.next_page();
        assert_eq!(view.page(), 1);

        view.apply_search("same");
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn test_append_shows_new_record_first_on_page_zero() {
        // Equal keys, so the stable order decides: the front insert wins.
        let items = vec![Item::new("old", "x", 0.0)];
        let mut view = ListView::new(items, 3).unwrap();

        view.append(Item::new("new", "x", 0.0));
        assert_eq!(view.page(), 0);
        assert_eq!(ids(&view)[0], "new");
    }

    #[test]
    fn test_sort_toggle_is_stable_for_ties() {
        let items = vec![
            Item::new("a", "x", 7.0),
            Item::new("b", "x", 7.0),
            Item::new("c", "x", 7.0),
        ];
        let mut view = ListView::new(items, 10).unwrap();
        let original = ids(&view);

        view.toggle_sort_order();
        assert_eq!(ids(&view), original);

        view.toggle_sort_order();
        assert_eq!(ids(&view), original);
    }

    #[test]
    fn test_replace_reapplies_search_and_clamps_page() {
        let items = (0..8)
            .map(|i| Item::new(&i.to_string(), "keep", i as f64))
            .collect();
        let mut view = ListView::new(items, 3).unwrap();

        view.apply_search("keep");
        view.set_page(2);

        view.replace(vec![
            Item::new("10", "keep", 1.0),
            Item::new("11", "drop", 2.0),
        ]);

        assert_eq!(view.stats().filtered, 1);
        assert_eq!(view.page(), 0);
        assert_eq!(ids(&view), vec!["10"]);
    }

    #[test]
    fn test_stats_sum_covers_filtered_view() {
        let items = vec![
            Item::new("1", "bark", 5.0),
            Item::new("2", "bark", 10.0),
            Item::new("3", "other", 100.0),
        ];
        let mut view = ListView::new(items, 2).unwrap();
        view.apply_search("bark");

        let stats = view.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.filtered, 2);
        assert_eq!(stats.sort_key_sum, 15.0);
        assert_eq!(stats.page_count, 1);
    }
}
