// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! spotwatch-engine: the monitoring and booking loop
//!
//! Drives poll cycles against a `SlotService`, races bookings when a
//! target class opens up, and enforces the run budgets. Single-threaded
//! and blocking; cancellation arrives over a channel-backed shutdown
//! signal so timed waits stay interruptible.

pub mod error;
pub mod monitor;
pub mod shutdown;

pub use error::MonitorError;
pub use monitor::{Monitor, RunReport, StopReason};
pub use shutdown::{shutdown_channel, ShutdownHandle, ShutdownSignal};
