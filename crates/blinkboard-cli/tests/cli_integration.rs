use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blinkboard(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blinkboard").unwrap();
    cmd.arg("--config-dir").arg(config.path());
    cmd
}

#[test]
fn test_no_subcommand_shows_guidance() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"));
}

#[test]
fn test_first_run_writes_default_config() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir).arg("tx").assert().success();

    let contents = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("blink_page_size = 3"));
}

#[test]
fn test_config_dir_falls_back_to_env_var() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("blinkboard")
        .unwrap()
        .env("BLINKBOARD_PATH", dir.path())
        .arg("tx")
        .assert()
        .success();

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_blink_list_pages_by_likes_descending() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["blink", "list", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second Blink"))
        .stdout(predicate::str::contains("Third Blink"))
        .stdout(predicate::str::contains("First Blink").not())
        .stdout(predicate::str::contains("Page 1/2"));
}

#[test]
fn test_blink_list_out_of_range_page_clamps() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["blink", "list", "--page-size", "2", "--page", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Blink"))
        .stdout(predicate::str::contains("Page 2/2"));
}

#[test]
fn test_blink_list_search_filters_and_notifies() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["blink", "list", "--search", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second Blink"))
        .stdout(predicate::str::contains("1 of 3 match \"second\""))
        .stderr(predicate::str::contains("Found 1 matching \"second\""));
}

#[test]
fn test_blink_list_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = blinkboard(&dir)
        .args(["--format", "json", "blink", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blinks = value["content"]["blinks"].as_array().unwrap();
    assert_eq!(blinks.len(), 3);
    assert_eq!(value["content"]["summary"]["total"], 3);
}

#[test]
fn test_blink_create_then_list_shows_it_first_page() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["blink", "create", "--name", "Fresh", "--description", "Just minted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created blink 4 (Fresh)"));
}

#[test]
fn test_blink_find_applies_only_the_final_burst_term() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "search_debounce_ms = 50\n",
    )
    .unwrap();

    blinkboard(&dir)
        .args(["blink", "find"])
        .write_stdin("b\nbl\nblink\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"blink\": 3 of 3 match"))
        .stdout(predicate::str::contains("\"bl\":").not());
}

#[test]
fn test_commerce_list_sorts_by_price() {
    let dir = TempDir::new().unwrap();
    let output = blinkboard(&dir)
        .args(["commerce", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let shirt = stdout.find("BARK T-Shirt").unwrap();
    let mug = stdout.find("BARK Mug").unwrap();
    assert!(shirt < mug, "pricier item should come first:\n{}", stdout);
}

#[test]
fn test_commerce_buy_unknown_item_fails() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["commerce", "buy", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_stake_rejects_nonpositive_amount() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["stake", "add", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_swap_quote_applies_demo_rate() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["swap", "quote", "BARK", "SOL", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 BARK -> 150 SOL"));
}

#[test]
fn test_dashboard_rejects_unknown_range() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["dashboard", "--range", "2y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown time range"));
}

#[test]
fn test_notification_read_marks_everything() {
    let dir = TempDir::new().unwrap();
    blinkboard(&dir)
        .args(["notification", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 unread"));
}
