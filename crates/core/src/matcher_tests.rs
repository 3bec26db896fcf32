use super::*;
use crate::fake::slot_at;
use crate::time::Weekday;
use yare::parameterized;

/// Friday 2025-06-06 09:30 in the gym's offset
const FRIDAY_0930: &str = "2025-06-06T09:30:00+02:00";

fn yoga_target() -> TargetClass {
    TargetClass {
        name: "yoga".to_string(),
        time: "09:30".parse().unwrap(),
        weekday: Weekday::new(5).unwrap(),
        location: Some("Studio".to_string()),
        instructor: Some("Camille".to_string()),
        priority: 1,
    }
}

fn yoga_slot() -> Slot {
    let mut slot = slot_at("s-1", "Power Yoga Class", FRIDAY_0930, 3, 12, true);
    slot.location_name = "Studio 2".to_string();
    slot.instructor_name = Some(" Camille ".to_string());
    slot
}

#[test]
fn all_clauses_satisfied_matches() {
    let slots = vec![yoga_slot()];
    let found = find_match(&yoga_target(), &slots);
    assert_eq!(found.map(|s| s.id.0.as_str()), Some("s-1"));
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let target = TargetClass {
        name: "YOGA".to_string(),
        location: None,
        instructor: None,
        ..yoga_target()
    };
    assert!(find_match(&target, &[yoga_slot()]).is_some());
}

// Each case breaks exactly one clause of an otherwise matching pair.
#[parameterized(
    wrong_name = { "pilates", FRIDAY_0930 },
    wrong_weekday = { "yoga", "2025-06-05T09:30:00+02:00" },
    wrong_time = { "yoga", "2025-06-06T09:35:00+02:00" },
)]
fn breaking_one_clause_unmatches(target_name: &str, slot_start: &str) {
    let target = TargetClass {
        name: target_name.to_string(),
        ..yoga_target()
    };
    let mut slot = yoga_slot();
    slot.start_at = chrono::DateTime::parse_from_rfc3339(slot_start).unwrap();
    assert!(find_match(&target, &[slot]).is_none());
}

#[test]
fn wrong_location_unmatches() {
    let mut slot = yoga_slot();
    slot.location_name = "Main Hall".to_string();
    assert!(find_match(&yoga_target(), &[slot]).is_none());
}

#[test]
fn wrong_instructor_unmatches() {
    let mut slot = yoga_slot();
    slot.instructor_name = Some("Paul".to_string());
    assert!(find_match(&yoga_target(), &[slot]).is_none());
}

#[test]
fn missing_instructor_unmatches_when_constrained() {
    let mut slot = yoga_slot();
    slot.instructor_name = None;
    assert!(find_match(&yoga_target(), &[slot]).is_none());
}

#[test]
fn tba_instructor_constraint_accepts_anyone() {
    let target = TargetClass {
        instructor: Some("TBA".to_string()),
        ..yoga_target()
    };
    let mut slot = yoga_slot();
    slot.instructor_name = Some("Paul".to_string());
    assert!(find_match(&target, &[slot]).is_some());
}

#[test]
fn unset_location_accepts_any_location() {
    let target = TargetClass {
        location: None,
        ..yoga_target()
    };
    let mut slot = yoga_slot();
    slot.location_name = "Main Hall".to_string();
    assert!(find_match(&target, &[slot]).is_some());
}

#[test]
fn first_match_in_catalog_order_wins() {
    let first = yoga_slot();
    let mut second = yoga_slot();
    second.id = crate::slot::SlotId::new("s-2");

    let slots = vec![first, second];
    let found = find_match(&yoga_target(), &slots).map(|s| s.id.0.as_str());
    assert_eq!(found, Some("s-1"));
}

#[test]
fn full_slots_still_match() {
    // Fullness is the caller's concern; the matcher only checks identity
    let mut slot = yoga_slot();
    slot.places_free = 0;
    let slots = vec![slot];
    let found = find_match(&yoga_target(), &slots);
    assert!(found.is_some());
    assert!(found.is_some_and(|s| s.is_full()));
}

#[test]
fn no_match_returns_none() {
    assert!(find_match(&yoga_target(), &[]).is_none());
}
