// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! spotwatch-core: domain types and pure logic for the spotwatch booking bot
//!
//! This crate provides:
//! - Value types for slots, target classes, weekdays and times of day
//! - The slot matcher and the bucketed poll schedule
//! - Attempt accounting, the advisory run lock and the notification model
//! - The `SlotService` seam implemented by the HTTP client

pub mod api;
pub mod attempts;
pub mod clock;
pub mod config;
pub mod matcher;
pub mod notify;
pub mod runlock;
pub mod schedule;
pub mod slot;
pub mod target;
pub mod time;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

// Re-exports
pub use api::{ApiError, BookingOutcome, SlotService};
pub use attempts::AttemptCounter;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::MonitorConfig;
pub use matcher::find_match;
pub use notify::{FanoutNotifier, LogNotifier, Notification, Notifier, NotifyError, NotifyKind};
pub use runlock::{LockError, RunLock, RunLockGuard};
pub use schedule::{HourRange, PollSchedule};
pub use slot::{Slot, SlotId};
pub use target::{sorted_by_priority, ClassKey, TargetClass};
pub use time::{TimeOfDay, Weekday};
