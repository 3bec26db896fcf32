// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adaptive poll pacing bucketed by hour of day.
//!
//! A plain lookup table, not a learned schedule: cancellations cluster
//! around rush hours, so polling is denser there and sparse at night.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hour-of-day range, start inclusive, end exclusive.
/// Wraps midnight when `start > end` (e.g. 22..6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

impl HourRange {
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            hour >= self.start && hour < self.end
        }
    }
}

/// Poll delay table keyed by hour-of-day category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSchedule {
    #[serde(with = "humantime_serde")]
    pub peak_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub normal_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub off_peak_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub night_interval: Duration,
    pub peak_hours: Vec<HourRange>,
    pub off_peak_hours: Vec<HourRange>,
    pub night_hours: Vec<HourRange>,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            peak_interval: Duration::from_secs(2 * 60),
            normal_interval: Duration::from_secs(5 * 60),
            off_peak_interval: Duration::from_secs(15 * 60),
            night_interval: Duration::from_secs(30 * 60),
            // Morning rush, lunch, evening rush
            peak_hours: vec![
                HourRange::new(6, 9),
                HourRange::new(12, 14),
                HourRange::new(18, 20),
            ],
            off_peak_hours: vec![HourRange::new(20, 22)],
            night_hours: vec![HourRange::new(22, 6)],
        }
    }
}

impl PollSchedule {
    /// Poll delay for the given local hour.
    /// Lookup order: night, peak, off-peak, then normal.
    pub fn interval_at(&self, hour: u8) -> Duration {
        if self.night_hours.iter().any(|r| r.contains(hour)) {
            return self.night_interval;
        }
        if self.peak_hours.iter().any(|r| r.contains(hour)) {
            return self.peak_interval;
        }
        if self.off_peak_hours.iter().any(|r| r.contains(hour)) {
            return self.off_peak_interval;
        }
        self.normal_interval
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
