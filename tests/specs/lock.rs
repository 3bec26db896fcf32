//! Run lock specs.
//!
//! `run` must refuse to start while a fresh lock exists, replace a stale
//! one, and leave no lock behind after a clean stop.

use crate::prelude::*;
use std::time::{Duration, SystemTime};

const FOREIGN_LOCK: &str =
    r#"{"pid": 1, "startTime": "2025-06-06T08:00:00+02:00", "targetClasses": 1}"#;

#[test]
fn zero_budget_run_stops_cleanly_and_removes_lock() {
    let ws = Workspace::new();
    let config = ws.config();

    spotwatch()
        .arg("--config")
        .arg(config)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("single-run budget reached"));

    assert!(!ws.lock_file().exists());
}

#[test]
fn fresh_lock_blocks_a_second_instance() {
    let ws = Workspace::new();
    let config = ws.config();
    std::fs::write(ws.lock_file(), FOREIGN_LOCK).unwrap();

    spotwatch()
        .arg("--config")
        .arg(config)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("another instance is already running"));

    // The foreign lock must be left in place
    assert!(ws.lock_file().exists());
}

#[test]
fn stale_lock_is_replaced_and_cleaned_up() {
    let ws = Workspace::new();
    let config = ws.config();
    std::fs::write(ws.lock_file(), FOREIGN_LOCK).unwrap();

    let seven_hours_ago = SystemTime::now() - Duration::from_secs(7 * 3600);
    std::fs::File::options()
        .write(true)
        .open(ws.lock_file())
        .unwrap()
        .set_modified(seven_hours_ago)
        .unwrap();

    spotwatch()
        .arg("--config")
        .arg(config)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("single-run budget reached"));

    assert!(!ws.lock_file().exists());
}
