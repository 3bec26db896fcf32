// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor runtime configuration.

use crate::schedule::PollSchedule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Budgets and pacing for one monitor run.
///
/// Every field has a default so an empty `[monitor]` table is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Catalog window requested from the remote service
    pub days_ahead: u32,

    /// Calendar ceiling on how long a run may keep monitoring
    #[serde(with = "humantime_serde")]
    pub max_monitoring: Duration,

    /// Wall-clock budget for a single process run
    #[serde(with = "humantime_serde")]
    pub max_runtime: Duration,

    /// Failed bookings allowed per class before it is set aside
    pub max_attempts_per_class: u32,

    /// Immediate retries when a booking call is rejected
    pub max_retries: u32,

    #[serde(with = "humantime_serde")]
    pub retry_delay: Duration,

    /// Pause between targets within one cycle
    #[serde(with = "humantime_serde")]
    pub target_delay: Duration,

    /// Pause after a cycle-level error before polling resumes
    #[serde(with = "humantime_serde")]
    pub error_cooldown: Duration,

    pub stop_after_first_booking: bool,

    pub lock_file: PathBuf,

    #[serde(with = "humantime_serde")]
    pub lock_stale_after: Duration,

    pub schedule: PollSchedule,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            days_ahead: 7,
            max_monitoring: Duration::from_secs(7 * 24 * 3600),
            max_runtime: Duration::from_secs(16200),
            max_attempts_per_class: 10,
            max_retries: 3,
            retry_delay: Duration::from_secs(10),
            target_delay: Duration::from_secs(2),
            error_cooldown: Duration::from_secs(300),
            stop_after_first_booking: true,
            lock_file: PathBuf::from("spotwatch.lock"),
            lock_stale_after: Duration::from_secs(6 * 3600),
            schedule: PollSchedule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_uses_defaults() {
        let config: MonitorConfig = toml::from_str("").unwrap();
        assert_eq!(config.days_ahead, 7);
        assert_eq!(config.max_runtime, Duration::from_secs(16200));
        assert_eq!(config.max_attempts_per_class, 10);
        assert!(config.stop_after_first_booking);
        assert_eq!(config.lock_stale_after, Duration::from_secs(6 * 3600));
    }

    #[test]
    fn humantime_durations_parse() {
        let config: MonitorConfig = toml::from_str(
            r#"
            days_ahead = 3
            max_runtime = "2h"
            retry_delay = "5s"
            error_cooldown = "1m"
            stop_after_first_booking = false
            lock_file = "/tmp/watch.lock"

            [schedule]
            normal_interval = "4m"
            "#,
        )
        .unwrap();

        assert_eq!(config.days_ahead, 3);
        assert_eq!(config.max_runtime, Duration::from_secs(7200));
        assert_eq!(config.retry_delay, Duration::from_secs(5));
        assert_eq!(config.error_cooldown, Duration::from_secs(60));
        assert!(!config.stop_after_first_booking);
        assert_eq!(config.lock_file, PathBuf::from("/tmp/watch.lock"));
        assert_eq!(
            config.schedule.normal_interval,
            Duration::from_secs(4 * 60)
        );
    }
}
