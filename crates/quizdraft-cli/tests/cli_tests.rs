//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdraft(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizdraft").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("QUIZDRAFT_OWNER_ID")
        .env_remove("QUIZDRAFT_OWNER_NAME");
    cmd
}

const INCOMPLETE_QUIZ: &str = r#"{
  "id": "quiz-1",
  "owner": { "id": "u-1", "name": "Kim" },
  "name": "Draft",
  "items": [
    {
      "uuid": "item-1",
      "question": "Capital of Korea?",
      "type": "choice",
      "options": [
        { "uuid": "o-1", "title": "Seoul", "isAnswer": true },
        { "uuid": "o-2", "title": "", "isAnswer": false }
      ]
    },
    {
      "uuid": "item-2",
      "question": "Describe a haiku",
      "type": "essay",
      "options": [
        { "uuid": "o-3", "title": "left over", "isAnswer": true }
      ],
      "essayAnswer": "Three lines, 5-7-5"
    }
  ]
}"#;

fn write_quiz(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("quiz.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn new_prints_default_draft() {
    let dir = TempDir::new().unwrap();

    let output = quizdraft(dir.path())
        .arg("new")
        .arg("--name")
        .arg("Quiz A")
        .output()
        .unwrap();
    assert!(output.status.success());

    let quiz: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quiz["name"], "Quiz A");
    assert_eq!(quiz["owner"]["id"], "anonymous");
    let items = quiz["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    let options = items[0]["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options[0]["isAnswer"], true);
    assert_eq!(options[1]["isAnswer"], false);
}

#[test]
fn new_uses_owner_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizdraft.toml"),
        "default_option_count = 3\n\n[owner]\nid = \"t-9\"\nname = \"Lee\"\n",
    )
    .unwrap();

    let output = quizdraft(dir.path())
        .args(["new", "--name", "Quiz B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let quiz: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quiz["owner"]["id"], "t-9");
    assert_eq!(quiz["items"][0]["options"].as_array().unwrap().len(), 3);
}

#[test]
fn new_writes_output_file() {
    let dir = TempDir::new().unwrap();

    quizdraft(dir.path())
        .args(["new", "--name", "Quiz C", "--output", "draft.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created draft.json"));

    assert!(dir.path().join("draft.json").exists());
}

#[test]
fn check_reports_incomplete_items() {
    let dir = TempDir::new().unwrap();
    let path = write_quiz(dir.path(), INCOMPLETE_QUIZ);

    quizdraft(dir.path())
        .arg("check")
        .arg("--quiz")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz: Draft (2 items)"))
        .stdout(predicate::str::contains("1 incomplete item(s)."))
        .stdout(predicate::str::contains("essay item carries options"));
}

#[test]
fn check_strict_fails_on_incomplete() {
    let dir = TempDir::new().unwrap();
    let path = write_quiz(dir.path(), INCOMPLETE_QUIZ);

    quizdraft(dir.path())
        .arg("check")
        .arg("--strict")
        .arg("--quiz")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn check_strict_fails_on_empty_quiz() {
    let dir = TempDir::new().unwrap();
    let path = write_quiz(
        dir.path(),
        r#"{"id":"q-0","owner":{"id":"u-1","name":"Kim"},"name":"Empty","items":[]}"#,
    );

    quizdraft(dir.path())
        .arg("check")
        .arg("--strict")
        .arg("--quiz")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("quiz has no items"))
        .stdout(predicate::str::contains("Ready to submit.").not());
}

#[test]
fn check_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    quizdraft(dir.path())
        .args(["check", "--quiz", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn submit_refuses_incomplete_quiz() {
    let dir = TempDir::new().unwrap();
    let path = write_quiz(dir.path(), INCOMPLETE_QUIZ);

    quizdraft(dir.path())
        .arg("submit")
        .arg("--quiz")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("incomplete item(s): 1"));
}

#[test]
fn forced_submit_clears_essay_options() {
    let dir = TempDir::new().unwrap();
    let path = write_quiz(dir.path(), INCOMPLETE_QUIZ);

    let output = quizdraft(dir.path())
        .arg("submit")
        .arg("--force")
        .arg("--quiz")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let quiz: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quiz["items"][0]["options"].as_array().unwrap().len(), 2);
    assert!(quiz["items"][1]["options"].as_array().unwrap().is_empty());
    assert_eq!(quiz["items"][1]["essayAnswer"], "Three lines, 5-7-5");
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdraft(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdraft.toml"))
        .stdout(predicate::str::contains("Created quizzes/example.json"));

    assert!(dir.path().join("quizdraft.toml").exists());
    assert!(dir.path().join("quizzes/example.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizdraft(dir.path()).arg("init").assert().success();
    quizdraft(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn example_quiz_is_ready_and_submits_to_file() {
    let dir = TempDir::new().unwrap();
    quizdraft(dir.path()).arg("init").assert().success();

    quizdraft(dir.path())
        .args(["check", "--strict", "--quiz", "quizzes/example.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to submit."));

    quizdraft(dir.path())
        .args([
            "submit",
            "--quiz",
            "quizzes/example.json",
            "--output",
            "submitted.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted Example Quiz (2 items)"));

    let submitted = std::fs::read_to_string(dir.path().join("submitted.json")).unwrap();
    let quiz: serde_json::Value = serde_json::from_str(&submitted).unwrap();
    assert_eq!(quiz["id"], "example-quiz");
}
