// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One remote bookable class session instance.

use crate::time::{TimeOfDay, Weekday};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Identifier of a slot on the remote booking service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotId(pub String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A class session as reported by the catalog.
///
/// Produced fresh on every fetch and never persisted. Timestamps keep the
/// offset the remote reported, so weekday and time-of-day reflect the gym's
/// local schedule regardless of where the bot runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub name: String,
    pub start_at: DateTime<FixedOffset>,
    pub end_at: Option<DateTime<FixedOffset>>,
    pub location_name: String,
    pub instructor_name: Option<String>,
    pub places_free: u32,
    pub places_total: u32,
    pub bookable: bool,
}

impl Slot {
    /// A spot is open and the remote allows booking it
    pub fn is_bookable(&self) -> bool {
        self.places_free > 0 && self.bookable
    }

    pub fn is_full(&self) -> bool {
        self.places_free == 0
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_date(&self.start_at)
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_time(&self.start_at)
    }

    /// One-line description for logs and notifications
    pub fn describe(&self) -> String {
        format!(
            "{} on {} at {} ({}/{} free)",
            self.name,
            self.weekday(),
            self.time_of_day(),
            self.places_free,
            self.places_total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(free: u32, bookable: bool) -> Slot {
        Slot {
            id: SlotId::new("s-1"),
            name: "Power Yoga Class".to_string(),
            start_at: DateTime::parse_from_rfc3339("2025-06-06T09:30:00+02:00").unwrap(),
            end_at: None,
            location_name: "Studio 2".to_string(),
            instructor_name: Some("Camille".to_string()),
            places_free: free,
            places_total: 12,
            bookable,
        }
    }

    #[test]
    fn bookable_needs_free_places_and_flag() {
        assert!(slot(3, true).is_bookable());
        assert!(!slot(0, true).is_bookable());
        assert!(!slot(3, false).is_bookable());
    }

    #[test]
    fn full_means_zero_free() {
        assert!(slot(0, true).is_full());
        assert!(!slot(1, true).is_full());
    }

    #[test]
    fn derived_weekday_and_time() {
        let s = slot(3, true);
        assert_eq!(s.weekday().index(), 5); // Friday
        assert_eq!(s.time_of_day().to_string(), "09:30");
    }

    #[test]
    fn describe_mentions_name_and_availability() {
        let text = slot(3, true).describe();
        assert!(text.contains("Power Yoga Class"));
        assert!(text.contains("3/12"));
        assert!(text.contains("Friday"));
    }
}
