//! Integration coverage for the list view against the dashboard's demo data,
//! including the debounced-search wiring a UI event loop would use.

use std::sync::Arc;
use std::time::Duration;

use blinkboard_engine::{ListView, SearchDebouncer};
use blinkboard_testing::{RecordingSink, seed_blinks};
use blinkboard_types::{Blink, BlinkDraft, Record, SortOrder};
use chrono::Utc;

fn names(view: &ListView<Blink>) -> Vec<String> {
    view.visible_slice()
        .iter()
        .map(|b| b.name.clone())
        .collect()
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let mut view = ListView::new(seed_blinks(), 10).unwrap();

    view.apply_search("bark");
    for blink in view.visible_slice() {
        let hit = blink
            .searchable_fields()
            .iter()
            .any(|f| f.to_lowercase().contains("bark"));
        assert!(hit, "{} should not match 'bark'", blink.name);
    }

    // "BARK Membership", "Peaky Barkers Mascot" (via "Barkers"), "BARK Blink".
    assert_eq!(view.stats().filtered, 3);
}

#[test]
fn search_notifies_sink_with_match_count() {
    let sink = Arc::new(RecordingSink::new());
    let mut view = ListView::new(seed_blinks(), 10)
        .unwrap()
        .with_sink(sink.clone());

    view.apply_search("underdog");

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "Search Results");
    assert!(recorded[0].1.contains("Found 3"));
}

#[test]
fn clearing_search_is_silent_and_restores_everything() {
    let sink = Arc::new(RecordingSink::new());
    let mut view = ListView::new(seed_blinks(), 10)
        .unwrap()
        .with_sink(sink.clone());

    view.apply_search("underdog");
    view.apply_search("");

    assert_eq!(view.stats().filtered, 6);
    // Only the non-empty search toasts.
    assert_eq!(sink.recorded().len(), 1);
}

#[test]
fn dashboard_grid_pages_by_three_most_liked_first() {
    let mut view = ListView::new(seed_blinks(), 3).unwrap();

    assert_eq!(
        names(&view),
        vec!["Peaky Barkers Mascot", "BARK Membership", "Underdog Champion"]
    );
    assert!(view.has_more());

    view.load_more();
    assert_eq!(
        names(&view),
        vec!["BARK Blink", "Underdog Rebel", "Underdog Hero"]
    );
    assert!(!view.has_more());
}

#[test]
fn ascending_order_reverses_the_grid() {
    let mut view = ListView::new(seed_blinks(), 10).unwrap();
    view.set_sort_order(SortOrder::Ascending);

    let likes: Vec<u64> = view.visible_slice().iter().map(|b| b.likes).collect();
    let mut sorted = likes.clone();
    sorted.sort();
    assert_eq!(likes, sorted);
}

#[test]
fn created_blink_appears_first_while_search_active() {
    let mut view = ListView::new(seed_blinks(), 3).unwrap();
    view.apply_search("underdog");
    view.set_sort_order(SortOrder::Ascending);

    let draft = BlinkDraft::new("Underdog Pup", "Freshly minted");
    view.append(Blink {
        id: "7".to_string(),
        name: draft.name.unwrap(),
        description: draft.description.unwrap(),
        image: None,
        created_at: Utc::now(),
        likes: 0,
        shares: 0,
        comments: 0,
        views: 0,
    });

    // Zero likes sorts first ascending; page reset makes it visible.
    assert_eq!(view.page(), 0);
    assert_eq!(names(&view)[0], "Underdog Pup");
    assert_eq!(view.stats().filtered, 4);
}

#[test]
fn page_count_is_ceil_of_filtered_over_page_size() {
    for page_size in 1..=7 {
        let view = ListView::new(seed_blinks(), page_size).unwrap();
        let expected = (6 + page_size - 1) / page_size;
        assert_eq!(view.page_count(), expected, "page size {}", page_size);
    }
}

#[test]
fn debounced_search_applies_only_the_final_term() {
    let mut view = ListView::new(seed_blinks(), 10).unwrap();
    let (debouncer, terms) = SearchDebouncer::channel(Duration::from_millis(25)).unwrap();

    // A burst of keystrokes, then the loop drains whatever fired.
    debouncer.submit("u");
    debouncer.submit("un");
    debouncer.submit("underdog");

    let term = terms
        .recv_timeout(Duration::from_millis(500))
        .expect("debounce should fire");
    view.apply_search(&term);

    assert_eq!(view.search_term(), "underdog");
    assert_eq!(view.stats().filtered, 3);
    assert!(
        terms.try_recv().is_err(),
        "superseded terms must not fire separately"
    );
}
