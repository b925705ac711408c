#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notez_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notez").unwrap();
    cmd.env("NOTEZ_CONFIG_DIR", config_dir.path())
        .env_remove("NOTEZ_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_session_create_edit_delete() {
    let temp = TempDir::new().unwrap();

    notez_cmd(&temp)
        .arg("--no-clipboard")
        .write_stdin(
            "new Groceries \"Milk, eggs\"\n\
             new Errands\n\
             edit 2\n\
             save \"Groceries for Sunday\"\n\
             delete 1\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created successfully"))
        .stdout(predicate::str::contains("Editing note 2: Groceries"))
        .stdout(predicate::str::contains("Note updated successfully"))
        .stdout(predicate::str::contains(
            "Note deleted successfully (1): Errands",
        ))
        .stdout(predicate::str::contains("1. Groceries for Sunday"))
        .stdout(predicate::str::contains("Milk, eggs"));
}

#[test]
fn test_session_json_listing_with_sequential_ids() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"id_style": "sequential"}"#,
    )
    .unwrap();

    notez_cmd(&temp)
        .arg("--no-clipboard")
        .write_stdin("new A\nnew B\nlist --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "note-2""#))
        .stdout(predicate::str::contains(r#""id": "note-1""#));
}

#[test]
fn test_share_without_clipboard_reports_failure() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"id_style": "sequential", "share_base_url": "https://notes.example.com/n/"}"#,
    )
    .unwrap();

    notez_cmd(&temp)
        .arg("--no-clipboard")
        .write_stdin("new A\nshare 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://notes.example.com/n/note-1"))
        .stdout(predicate::str::contains("Could not copy share link"));
}

#[test]
fn test_session_errors_do_not_abort() {
    let temp = TempDir::new().unwrap();

    notez_cmd(&temp)
        .arg("--no-clipboard")
        .write_stdin("update\nrm note-404\nview 3\nnew Survivor\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Note not found: note-404"))
        .stdout(predicate::str::contains("Error: Api Error: Index 3 not found"))
        .stdout(predicate::str::contains("1. Survivor"));
}

#[test]
fn test_range_past_the_list_does_not_end_session() {
    let temp = TempDir::new().unwrap();

    notez_cmd(&temp)
        .arg("--no-clipboard")
        .write_stdin(
            "new A\n\
             new B\n\
             view 1-5\n\
             delete 1-18446744073709551615\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Api Error: Index 5 not found"))
        .stdout(predicate::str::contains("Error: Api Error: Index"))
        .stdout(predicate::str::contains("1. B"))
        .stdout(predicate::str::contains("2. A"));
}

#[test]
fn test_empty_session_prints_hint() {
    let temp = TempDir::new().unwrap();

    notez_cmd(&temp)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();

    notez_cmd(&temp)
        .args(["config", "share-base-url", "https://share.example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "share-base-url set to https://share.example.org",
        ));

    notez_cmd(&temp)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "share-base-url = https://share.example.org",
        ))
        .stdout(predicate::str::contains("id-style = uuid"));

    notez_cmd(&temp)
        .args(["config", "id-style", "random"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid id style"));
}

#[test]
fn test_malformed_config_fails_the_session() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{ not json").unwrap();

    notez_cmd(&temp)
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}
