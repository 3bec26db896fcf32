use super::*;
use std::time::Duration;

fn start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-06-06T09:30:00+02:00").unwrap()
}

#[test]
fn fake_clock_returns_start_time() {
    let clock = FakeClock::at(start());
    assert_eq!(clock.now(), start());
}

#[test]
fn fake_clock_advances() {
    let clock = FakeClock::at(start());
    clock.advance(Duration::from_secs(90));

    let expected = DateTime::parse_from_rfc3339("2025-06-06T09:31:30+02:00").unwrap();
    assert_eq!(clock.now(), expected);
}

#[test]
fn fake_clock_set_overrides() {
    let clock = FakeClock::at(start());
    let later = DateTime::parse_from_rfc3339("2025-06-07T22:00:00+02:00").unwrap();
    clock.set(later);
    assert_eq!(clock.now(), later);
}

#[test]
fn clones_share_time() {
    let clock = FakeClock::at(start());
    let other = clock.clone();
    clock.advance(Duration::from_secs(60));
    assert_eq!(other.now(), clock.now());
}

#[test]
fn system_clock_is_monotonic_enough() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
