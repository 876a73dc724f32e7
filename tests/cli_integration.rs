use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn ticklist(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ticklist").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("mem.txt"));
    cmd
}

fn write_items(dir: &Path, json: &str) {
    fs::write(dir.join("todo.txt"), json).unwrap();
}

fn read_items(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("todo.txt")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_first_run_shows_seed_data() {
    let temp_dir = TempDir::new().unwrap();

    ticklist(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("add a todo item"))
        .stdout(predicate::str::contains("launch this simple todo list"))
        .stdout(predicate::str::contains("[click me to add a new todo item]"));

    let config = fs::read_to_string(temp_dir.path().join("mem.txt")).unwrap();
    assert!(config.contains("todo_file"));
}

#[test]
fn test_list_is_sorted_and_saved() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["banana", "1kiwi"], "pass": []}"#);

    ticklist(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1kiwi.*banana").unwrap());

    assert_eq!(
        read_items(temp_dir.path())["todo"],
        serde_json::json!(["1kiwi", "banana"])
    );
}

#[test]
fn test_add_with_text() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": [], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["add", "b: buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added: b: buy milk"));

    assert_eq!(
        read_items(temp_dir.path())["todo"],
        serde_json::json!(["b: buy milk"])
    );
}

#[test]
fn test_done_and_reopen() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["a", "b"], "pass": ["x"]}"#);

    ticklist(temp_dir.path())
        .args(["done", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item completed: b"));

    let items = read_items(temp_dir.path());
    assert_eq!(items["todo"], serde_json::json!(["a"]));
    assert_eq!(items["pass"], serde_json::json!(["x", "b"]));

    // pass rows are shown newest first, so row 0 is "b"
    ticklist(temp_dir.path())
        .args(["reopen", "0", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item reopened: b"));

    let items = read_items(temp_dir.path());
    assert_eq!(items["todo"], serde_json::json!(["a", "b"]));
    assert_eq!(items["pass"], serde_json::json!(["x"]));
}

#[test]
fn test_rows_follow_the_filter() {
    let temp_dir = TempDir::new().unwrap();
    write_items(
        temp_dir.path(),
        r#"{"todo": ["a: one", "b: two", "a: three"], "pass": []}"#,
    );

    // with the filter, row 1 is the second "a" item
    ticklist(temp_dir.path())
        .args(["--todo-filter", "a :", "done", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item completed: a: three"));

    assert_eq!(
        read_items(temp_dir.path())["todo"],
        serde_json::json!(["a: one", "b: two"])
    );
}

#[test]
fn test_edit_with_text() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["a", "b"], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["edit", "0", "a: renamed"])
        .assert()
        .success();

    assert_eq!(
        read_items(temp_dir.path())["todo"],
        serde_json::json!(["a: renamed", "b"])
    );
}

#[test]
fn test_confirmation_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["a"], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["done", "0"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));
    assert_eq!(read_items(temp_dir.path())["todo"], serde_json::json!(["a"]));

    ticklist(temp_dir.path())
        .args(["done", "0"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("send it to pass?"));
    assert_eq!(read_items(temp_dir.path())["pass"], serde_json::json!(["a"]));
}

#[test]
fn test_missing_row_is_a_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["a"], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["done", "5", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todo item at row 5"));
}

#[test]
fn test_malformed_filter_fails_without_changes() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": ["a"], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["--todo-filter", "a(", "done", "0", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed filter for todo items"));

    assert_eq!(read_items(temp_dir.path())["todo"], serde_json::json!(["a"]));
}

#[test]
fn test_bad_second_filter_saves_nothing() {
    let temp_dir = TempDir::new().unwrap();
    // unsorted on disk, so a refresh would rewrite it
    let original = r#"{"todo": ["banana", "1kiwi"], "pass": []}"#;
    write_items(temp_dir.path(), original);

    ticklist(temp_dir.path())
        .args(["--todo-filter", "b", "--pass-filter", "(", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed filter for pass items"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("todo.txt")).unwrap(),
        original
    );
}

#[test]
fn test_unreadable_data_file_is_not_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("todo.txt");
    fs::create_dir(&data_path).unwrap();

    ticklist(temp_dir.path())
        .args(["add", "new thing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));

    assert!(data_path.is_dir());
}

#[test]
fn test_multiline_text_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_items(temp_dir.path(), r#"{"todo": [], "pass": []}"#);

    ticklist(temp_dir.path())
        .args(["add", "two\nlines"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item"));
}

#[test]
fn test_config_points_elsewhere() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("mem.txt"),
        r#"{"todo_file": "data/items.json"}"#,
    )
    .unwrap();

    ticklist(temp_dir.path())
        .args(["add", "b: elsewhere"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("data/items.json")).unwrap();
    assert!(content.contains("b: elsewhere"));
    assert!(!temp_dir.path().join("todo.txt").exists());
}
