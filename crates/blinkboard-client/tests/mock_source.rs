use std::sync::Arc;
use std::time::{Duration, Instant};

use blinkboard_client::{Client, MockApi};
use blinkboard_engine::ListView;
use blinkboard_testing::RecordingSink;
use blinkboard_types::BlinkDraft;

#[test]
fn test_fetched_blinks_drive_a_list_view() {
    let client = Client::mock();

    let blinks = client.blinks().list().unwrap();
    let mut view = ListView::new(blinks, 2).unwrap();

    // Likes descending: Second (20), Third (15) / First (10).
    let ids: Vec<&str> = view.visible_slice().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);

    view.next_page();
    let ids: Vec<&str> = view.visible_slice().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_created_blink_appends_to_the_front_of_the_view() {
    let client = Client::mock();
    let mut view = ListView::new(client.blinks().list().unwrap(), 3).unwrap();
    view.set_page(1);

    let blink = client
        .blinks()
        .create(BlinkDraft::new("Fresh", "Hot off the press"))
        .unwrap();
    view.append(blink);

    // Creation resets to the first page; the zero-like newcomer sorts last
    // but is present in the unfiltered set.
    let stats = view.stats();
    assert_eq!(stats.page, 0);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.filtered, 4);
}

#[test]
fn test_server_side_search_replaces_the_collection() {
    let client = Client::mock();
    let sink = Arc::new(RecordingSink::new());
    let mut view = ListView::new(client.blinks().list().unwrap(), 3)
        .unwrap()
        .with_sink(sink.clone());

    let hits = client.blinks().search("second").unwrap();
    view.replace(hits);

    assert_eq!(view.stats().total, 1);
    assert_eq!(view.visible_slice()[0].name, "Second Blink");
    // Replacement is not a local search; the sink stays quiet.
    assert!(sink.is_empty());
}

#[test]
fn test_latency_seam_delays_calls() {
    let api = MockApi::new().with_latency(Duration::from_millis(30));

    let start = Instant::now();
    let client = Client::new(Arc::new(api));
    client.blinks().list().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[test]
fn test_token_prices_follow_address_order() {
    let client = Client::mock();
    let addresses = vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()];

    let prices = client.market().prices("solana", &addresses).unwrap();
    assert_eq!(prices["aaa"], 1.0);
    assert_eq!(prices["bbb"], 1.1);
    assert_eq!(prices["ccc"], 1.2);
}
