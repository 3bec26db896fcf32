// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target class specifications
//!
//! A target describes one recurring session the user wants booked. The set
//! of active targets shrinks at runtime as classes get booked.

use crate::time::{TimeOfDay, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel instructor value meaning "any instructor"
pub const ANY_INSTRUCTOR: &str = "TBA";

/// A user-defined pattern describing which recurring session to watch for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetClass {
    /// Case-insensitive substring matched against the slot name
    pub name: String,
    /// Exact local start time, `HH:MM`
    pub time: TimeOfDay,
    /// Local weekday, 0=Sunday..6=Saturday
    pub weekday: Weekday,
    /// Substring matched against the slot location, any location when unset
    #[serde(default)]
    pub location: Option<String>,
    /// Exact instructor name; unset or `"TBA"` means any instructor
    #[serde(default)]
    pub instructor: Option<String>,
    /// Lower priority values are checked first
    #[serde(default)]
    pub priority: i32,
}

impl TargetClass {
    pub fn key(&self) -> ClassKey {
        ClassKey {
            name: self.name.clone(),
            time: self.time,
        }
    }

    /// The instructor constraint, if one is actually set.
    /// The `"TBA"` sentinel and blank values mean any instructor.
    pub fn instructor_constraint(&self) -> Option<&str> {
        self.instructor
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty() && *i != ANY_INSTRUCTOR)
    }
}

/// Key for per-class attempt accounting: name plus time of day
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassKey {
    pub name: String,
    pub time: TimeOfDay,
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.time)
    }
}

/// Targets ordered by ascending priority; ties keep their original order
pub fn sorted_by_priority(targets: &[TargetClass]) -> Vec<TargetClass> {
    let mut sorted = targets.to_vec();
    sorted.sort_by_key(|t| t.priority);
    sorted
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
