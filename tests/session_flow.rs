//! Scenario tests for the interactive session controller
//!
//! Each test drives the public API the way a watch-mode host does:
//! start, forward keys, feed results, and observe run requests.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use snapit::keys;
use snapit::model::AggregatedResult;
use snapit::session::{EndReason, SnapshotInteractiveMode};

type Calls = Rc<RefCell<Vec<(String, bool)>>>;

struct Harness {
    mode: SnapshotInteractiveMode<Vec<u8>>,
    calls: Calls,
}

impl Harness {
    fn new() -> Self {
        Self {
            mode: SnapshotInteractiveMode::new(Vec::new()),
            calls: Rc::default(),
        }
    }

    fn start(&mut self, paths: &[&str]) {
        let sink = Rc::clone(&self.calls);
        self.mode
            .start(paths.iter().copied(), move |path: &str, update: bool| {
                sink.borrow_mut().push((path.to_string(), update))
            });
    }

    fn press(&mut self, code: KeyCode) {
        self.mode.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn pass(&mut self) {
        self.mode
            .handle_results(&AggregatedResult::resolved())
            .unwrap();
    }

    fn fail(&mut self) {
        self.mode
            .handle_results(&AggregatedResult::snapshot_failure())
            .unwrap();
    }

    fn queue(&self) -> Vec<String> {
        self.mode.pending_paths().map(str::to_string).collect()
    }

    fn take_calls(&self) -> Vec<(String, bool)> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

fn call(path: &str, update: bool) -> (String, bool) {
    (path.to_string(), update)
}

#[test]
fn empty_start_stays_inactive() {
    let mut h = Harness::new();
    h.start(&[]);
    assert!(!h.mode.is_active());
    assert!(h.take_calls().is_empty());
}

#[test]
fn start_requests_first_file() {
    let mut h = Harness::new();
    assert!(!h.mode.is_active());
    h.start(&["A", "B", "C"]);
    assert!(h.mode.is_active());
    assert_eq!(h.take_calls(), vec![call("A", false)]);
}

#[test]
fn skip_moves_head_to_tail() {
    let mut h = Harness::new();
    h.start(&["A", "B", "C"]);
    h.take_calls();

    h.press(keys::SKIP);
    assert_eq!(h.queue(), vec!["B", "C", "A"]);
    assert_eq!(h.take_calls(), vec![call("B", false)]);

    h.press(keys::SKIP);
    h.press(keys::SKIP);
    assert_eq!(h.queue(), vec!["A", "B", "C"]);
}

#[test]
fn skip_alone_does_nothing() {
    let mut h = Harness::new();
    h.start(&["A"]);
    h.take_calls();

    h.press(keys::SKIP);
    assert_eq!(h.queue(), vec!["A"]);
    assert!(h.take_calls().is_empty());
}

#[test]
fn update_keeps_queue() {
    let mut h = Harness::new();
    h.start(&["A", "B"]);
    h.take_calls();

    h.press(keys::UPDATE);
    h.press(keys::UPDATE);
    assert_eq!(h.take_calls(), vec![call("A", true), call("A", true)]);
    assert_eq!(h.queue(), vec!["A", "B"]);
}

#[test]
fn passing_result_advances() {
    let mut h = Harness::new();
    h.start(&["A", "B", "C"]);
    h.take_calls();

    h.pass();
    assert_eq!(h.queue(), vec!["B", "C"]);
    assert_eq!(h.take_calls(), vec![call("B", false)]);
}

#[test]
fn failing_result_on_last_file_redraws() {
    let mut h = Harness::new();
    h.start(&["A"]);
    h.take_calls();

    h.fail();
    assert_eq!(h.queue(), vec!["A"]);
    assert!(h.mode.is_active());
    assert!(h.take_calls().is_empty());
    assert!(!h.mode.pipe().is_empty());
}

#[test]
fn passing_last_file_drains_session() {
    let mut h = Harness::new();
    h.start(&["A"]);
    h.take_calls();

    h.pass();
    assert!(!h.mode.is_active());
    assert!(h.queue().is_empty());
    assert_eq!(h.take_calls(), vec![call("", false)]);
    assert_eq!(h.mode.end_reason(), Some(EndReason::Completed));
}

#[test]
fn quit_and_escape_end_session() {
    for code in [keys::QUIT, keys::ESC] {
        let mut h = Harness::new();
        h.start(&["A", "B", "C"]);
        h.take_calls();

        h.press(code);
        assert!(!h.mode.is_active());
        assert_eq!(h.take_calls(), vec![call("", false)]);
        assert_eq!(h.mode.end_reason(), Some(EndReason::Aborted));
    }
}

#[test]
fn abort_twice_matches_abort_once() {
    let mut h = Harness::new();
    h.start(&["A", "B"]);
    h.mode.abort();
    let once = (h.mode.is_active(), h.queue(), h.mode.end_reason());
    h.mode.abort();
    let twice = (h.mode.is_active(), h.queue(), h.mode.end_reason());
    assert_eq!(once, twice);
}

#[test]
fn full_review_with_update_and_skip() {
    let mut h = Harness::new();
    h.start(&["A", "B", "C"]);
    h.fail();
    h.press(keys::SKIP);
    h.fail();
    h.press(keys::UPDATE);
    h.pass();
    h.press(keys::RUN);
    h.pass();
    h.fail();
    h.press(keys::UPDATE);
    h.pass();

    assert_eq!(
        h.take_calls(),
        vec![
            call("A", false),
            call("B", false),
            call("B", true),
            call("C", false),
            call("C", false),
            call("A", false),
            call("A", true),
            call("", false),
        ]
    );
    assert!(!h.mode.is_active());
    assert_eq!(h.mode.end_reason(), Some(EndReason::Completed));
}

#[test]
fn session_can_restart_after_ending() {
    let mut h = Harness::new();
    h.start(&["A"]);
    h.press(keys::QUIT);
    h.take_calls();

    h.start(&["B", "C"]);
    assert!(h.mode.is_active());
    assert_eq!(h.mode.end_reason(), None);
    assert_eq!(h.mode.total_count(), 2);
    assert_eq!(h.take_calls(), vec![call("B", false)]);
}
