//! Integration tests running a real runner process
//!
//! A small shell script stands in for the test runner: it fails the
//! snapshot summary unless it is invoked with the update flag.

#![cfg(unix)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use snapit::keys;
use snapit::runner::{RunRequest, RunTests, SummaryParser, TestRunner};
use snapit::session::EndReason;
use snapit::ui::Painter;
use snapit::watch::WatchSession;

const FAKE_RUNNER: &str = r#"#!/bin/sh
if [ "$1" = "--update" ]; then
  echo "PASS $2"
  echo "Snapshots:   1 updated, 1 total"
  exit 0
fi
case "$1" in
  *ok*)
    echo "PASS $1"
    echo "Snapshots:   1 passed, 1 total"
    exit 0
    ;;
  *)
    echo "FAIL $1"
    echo "Snapshots:   1 failed, 1 total"
    exit 1
    ;;
esac
"#;

fn fake_runner() -> (TempDir, TestRunner) {
    let dir = TempDir::new().unwrap();
    let script: PathBuf = dir.path().join("runner.sh");
    fs::write(&script, FAKE_RUNNER).unwrap();
    let command = format!("sh {}", script.display());
    let runner = TestRunner::from_command_line(&command, "--update").unwrap();
    (dir, runner)
}

#[test]
fn test_runner_reports_snapshot_failure() {
    let (_dir, runner) = fake_runner();
    let run = runner.run(&RunRequest::new("button.test.js", false)).unwrap();
    assert!(run.results.has_snapshot_failure());
    assert!(!run.results.success);
    assert!(run.output.contains("FAIL button.test.js"));
}

#[test]
fn test_runner_update_resolves_failure() {
    let (_dir, mut runner) = fake_runner();
    let run = runner
        .run_tests(&RunRequest::new("button.test.js", true))
        .unwrap();
    assert!(!run.results.has_snapshot_failure());
    assert_eq!(run.results.snapshot.updated, 1);
    assert!(run.results.success);
}

#[test]
fn test_failure_pattern_on_real_output() {
    let (_dir, runner) = fake_runner();
    let runner = runner.with_parser(SummaryParser::with_failure_pattern("^PASS ok").unwrap());
    let run = runner.run(&RunRequest::new("ok.test.js", false)).unwrap();
    // Summary says passed, but the pattern marks it as a failure
    assert_eq!(run.results.snapshot.unmatched, 0);
    assert!(run.results.has_snapshot_failure());
}

#[test]
fn test_watch_session_end_to_end() {
    let (_dir, runner) = fake_runner();
    let mut session = WatchSession::new(runner, Vec::new(), Painter::plain());
    session.start(["ok.test.js", "button.test.js", "card.test.js"]);

    // ok.test.js passes, button.test.js fails and waits for input
    session.run_pending().unwrap();
    assert!(!session.is_finished());
    assert_eq!(session.mode().current_path(), Some("button.test.js"));

    session.on_key(crossterm::event::KeyEvent::new(
        keys::SKIP,
        crossterm::event::KeyModifiers::NONE,
    ));
    session.run_pending().unwrap();
    assert_eq!(session.mode().current_path(), Some("card.test.js"));

    for _ in 0..2 {
        session.on_key(crossterm::event::KeyEvent::new(
            keys::UPDATE,
            crossterm::event::KeyModifiers::NONE,
        ));
        session.run_pending().unwrap();
    }

    assert!(session.is_finished());
    assert_eq!(session.end_reason(), Some(EndReason::Completed));
    assert_eq!(session.runs(), 6);

    let out = String::from_utf8_lossy(session.mode().pipe()).into_owned();
    assert!(out.contains("2 suites failed, 1 suite passed"));
    assert!(out.contains("1 suite failed, 2 suites passed"));
}
