use super::*;
use std::time::Instant;

#[test]
fn wait_times_out_without_a_trigger() {
    let (_handle, mut signal) = shutdown_channel();
    assert!(!signal.wait(Duration::from_millis(10)));
    assert!(!signal.is_triggered());
}

#[test]
fn trigger_interrupts_a_wait() {
    let (handle, mut signal) = shutdown_channel();
    handle.trigger();
    let start = Instant::now();
    assert!(signal.wait(Duration::from_secs(30)));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn signal_latches_after_trigger() {
    let (handle, mut signal) = shutdown_channel();
    handle.trigger();
    assert!(signal.is_triggered());
    assert!(signal.is_triggered());
    assert!(signal.wait(Duration::from_secs(30)));
}

#[test]
fn repeated_triggers_are_harmless() {
    let (handle, mut signal) = shutdown_channel();
    handle.trigger();
    handle.trigger();
    handle.clone().trigger();
    assert!(signal.is_triggered());
}

#[test]
fn wait_survives_dropped_handles() {
    let (handle, mut signal) = shutdown_channel();
    drop(handle);
    assert!(!signal.wait(Duration::from_millis(10)));
}

#[test]
fn trigger_from_another_thread() {
    let (handle, mut signal) = shutdown_channel();
    let worker = std::thread::spawn(move || handle.trigger());
    assert!(signal.wait(Duration::from_secs(30)));
    worker.join().unwrap();
}
