use super::*;
use std::fs::File;
use std::time::SystemTime;

fn started() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-06-06T08:00:00+02:00").unwrap()
}

const SIX_HOURS: Duration = Duration::from_secs(6 * 3600);

#[test]
fn acquire_writes_current_pid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.lock");

    let guard = RunLockGuard::acquire(&path, SIX_HOURS, 3, started()).unwrap();
    assert_eq!(guard.path(), path);

    let lock: RunLock = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(lock.pid, std::process::id());
    assert_eq!(lock.target_classes, 3);
}

#[test]
fn fresh_lock_blocks_acquisition() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.lock");
    let _guard = RunLockGuard::acquire(&path, SIX_HOURS, 1, started()).unwrap();

    let second = RunLockGuard::acquire(&path, SIX_HOURS, 1, started());
    assert!(matches!(second, Err(LockError::Contended(_))));
    assert!(path.exists());
}

#[test]
fn stale_lock_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.lock");
    fs::write(&path, "{}").unwrap();

    let seven_hours_ago = SystemTime::now() - Duration::from_secs(7 * 3600);
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(seven_hours_ago)
        .unwrap();

    let guard = RunLockGuard::acquire(&path, SIX_HOURS, 2, started()).unwrap();
    let lock: RunLock = serde_json::from_str(&fs::read_to_string(guard.path()).unwrap()).unwrap();
    assert_eq!(lock.target_classes, 2);
}

#[test]
fn drop_removes_marker_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.lock");

    let guard = RunLockGuard::acquire(&path, SIX_HOURS, 1, started()).unwrap();
    assert!(path.exists());
    drop(guard);
    assert!(!path.exists());
}
