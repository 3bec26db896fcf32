// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slot matching against target class specifications.

use crate::slot::Slot;
use crate::target::TargetClass;

/// Find the first slot satisfying every clause of `target`.
///
/// The catalog is not globally sorted, so when several sessions share a
/// name, time and weekday the first in catalog order wins. Returns `None`
/// when nothing matches; an empty catalog is not an error.
pub fn find_match<'a>(target: &TargetClass, slots: &'a [Slot]) -> Option<&'a Slot> {
    slots.iter().find(|slot| matches(target, slot))
}

/// All five clauses must hold: name substring, weekday, exact time of day,
/// optional location substring, optional exact instructor.
fn matches(target: &TargetClass, slot: &Slot) -> bool {
    if !slot
        .name
        .to_lowercase()
        .contains(&target.name.to_lowercase())
    {
        return false;
    }

    if slot.weekday() != target.weekday {
        return false;
    }

    if slot.time_of_day() != target.time {
        return false;
    }

    if let Some(location) = &target.location {
        if !slot.location_name.contains(location.as_str()) {
            return false;
        }
    }

    if let Some(instructor) = target.instructor_constraint() {
        match slot.instructor_name.as_deref() {
            Some(name) if name.trim() == instructor => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
