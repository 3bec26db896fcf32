// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The monitoring and booking loop.
//!
//! One cycle fetches the catalog for each remaining target in priority
//! order and races a booking as soon as a matching slot has a free place.
//! Between cycles the loop sleeps according to the hour-bucketed poll
//! schedule. All waits go through the shutdown signal so cancellation is
//! prompt, and all budgets are measured against the injected clock.

use crate::error::MonitorError;
use crate::shutdown::ShutdownSignal;
use chrono::{DateTime, FixedOffset, Timelike};
use spotwatch_core::{
    find_match, sorted_by_priority, ApiError, AttemptCounter, BookingOutcome, ClassKey, Clock,
    LockError, MonitorConfig, Notification, Notifier, RunLockGuard, Slot, SlotService,
    TargetClass, Weekday,
};

/// Why a monitor run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    AlreadyRunning,
    Cancelled,
    MonitoringWindowElapsed,
    RuntimeBudgetElapsed,
    AllTargetsBooked,
    FirstBookingComplete,
}

impl StopReason {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::AlreadyRunning => "another instance is already running",
            Self::Cancelled => "stop requested by operator",
            Self::MonitoringWindowElapsed => "maximum monitoring window reached",
            Self::RuntimeBudgetElapsed => "single-run budget reached",
            Self::AllTargetsBooked => "all target classes booked",
            Self::FirstBookingComplete => "first booking complete",
        }
    }
}

/// Summary of one completed run.
#[derive(Debug)]
pub struct RunReport {
    pub reason: StopReason,
    pub cycles: u32,
    pub booked: Vec<String>,
}

enum CycleOutcome {
    Continue,
    Stop(StopReason),
}

pub struct Monitor<S: SlotService, N: Notifier, C: Clock> {
    service: S,
    notifier: N,
    clock: C,
    config: MonitorConfig,
    targets: Vec<TargetClass>,
    attempts: AttemptCounter,
    started_at: DateTime<FixedOffset>,
    cycles: u32,
    booked: Vec<String>,
    shutdown: ShutdownSignal,
}

impl<S: SlotService, N: Notifier, C: Clock> Monitor<S, N, C> {
    pub fn new(
        service: S,
        notifier: N,
        clock: C,
        config: MonitorConfig,
        targets: Vec<TargetClass>,
        shutdown: ShutdownSignal,
    ) -> Self {
        let started_at = clock.now();
        Self {
            service,
            notifier,
            clock,
            config,
            targets,
            attempts: AttemptCounter::new(),
            started_at,
            cycles: 0,
            booked: Vec::new(),
            shutdown,
        }
    }

    /// Run until a stop condition is reached.
    ///
    /// Service errors do not end the run; they trigger the error cooldown
    /// and the loop resumes. Only a second live instance or a local lock
    /// failure prevent the run from starting.
    pub fn run(&mut self) -> Result<RunReport, MonitorError> {
        self.started_at = self.clock.now();

        let guard = match RunLockGuard::acquire(
            &self.config.lock_file,
            self.config.lock_stale_after,
            self.targets.len(),
            self.started_at,
        ) {
            Ok(guard) => guard,
            Err(LockError::Contended(path)) => {
                tracing::info!(path = %path.display(), "exiting: run lock is held");
                return Ok(self.report(StopReason::AlreadyRunning));
            }
            Err(error) => return Err(error.into()),
        };

        tracing::info!(
            targets = self.targets.len(),
            days_ahead = self.config.days_ahead,
            "monitoring started"
        );
        self.send(Notification::monitoring_started(self.targets.len()));

        let reason = loop {
            match self.run_cycle() {
                Ok(CycleOutcome::Stop(reason)) => break reason,
                Ok(CycleOutcome::Continue) => {
                    let hour = self.clock.now().hour() as u8;
                    let delay = self.config.schedule.interval_at(hour);
                    tracing::debug!(cycle = self.cycles, delay_secs = delay.as_secs(), "cycle complete");
                    if self.shutdown.wait(delay) {
                        break StopReason::Cancelled;
                    }
                }
                Err(error) => {
                    tracing::warn!(error = %error, "poll cycle failed");
                    self.send(Notification::error("poll cycle", &error.to_string()));
                    if self.shutdown.wait(self.config.error_cooldown) {
                        break StopReason::Cancelled;
                    }
                }
            }
        };

        tracing::info!(reason = reason.describe(), cycles = self.cycles, "monitoring stopped");
        self.send(Notification::monitoring_stopped(reason.describe()));
        drop(guard);
        Ok(self.report(reason))
    }

    fn report(&self, reason: StopReason) -> RunReport {
        RunReport {
            reason,
            cycles: self.cycles,
            booked: self.booked.clone(),
        }
    }

    fn send(&self, notification: Notification) {
        if let Err(error) = self.notifier.notify(&notification) {
            tracing::warn!(error = %error, "notification delivery failed");
        }
    }

    fn check_budgets(&self) -> Option<StopReason> {
        let elapsed = (self.clock.now() - self.started_at)
            .to_std()
            .unwrap_or_default();
        if elapsed >= self.config.max_monitoring {
            return Some(StopReason::MonitoringWindowElapsed);
        }
        if elapsed >= self.config.max_runtime {
            return Some(StopReason::RuntimeBudgetElapsed);
        }
        None
    }

    /// One pass over the remaining targets.
    fn run_cycle(&mut self) -> Result<CycleOutcome, ApiError> {
        if self.shutdown.is_triggered() {
            return Ok(CycleOutcome::Stop(StopReason::Cancelled));
        }
        if let Some(reason) = self.check_budgets() {
            return Ok(CycleOutcome::Stop(reason));
        }

        self.cycles += 1;

        for target in sorted_by_priority(&self.targets) {
            let slots = match self.service.fetch_slots(self.config.days_ahead) {
                Ok(slots) => slots,
                Err(error) if error.is_per_target() => {
                    tracing::warn!(class = %target.key(), error = %error, "catalog fetch failed for target");
                    continue;
                }
                Err(error) => return Err(error),
            };

            match find_match(&target, &slots) {
                Some(slot) if slot.is_bookable() => {
                    let slot = slot.clone();
                    tracing::info!(class = %target.key(), slot = %slot.id, "spot available: {}", slot.describe());
                    self.send(Notification::spot_available(&slot));
                    if let Some(reason) = self.try_book(&target, &slot)? {
                        return Ok(CycleOutcome::Stop(reason));
                    }
                }
                Some(slot) => {
                    tracing::debug!(class = %target.key(), slot = %slot.id, "matched slot is full");
                }
                None => {
                    tracing::debug!(class = %target.key(), "no matching slot in catalog");
                }
            }

            if self.shutdown.wait(self.config.target_delay) {
                return Ok(CycleOutcome::Stop(StopReason::Cancelled));
            }
        }

        if self.targets.is_empty() {
            return Ok(CycleOutcome::Stop(StopReason::AllTargetsBooked));
        }
        Ok(CycleOutcome::Continue)
    }

    /// Race the booking, with bounded in-cycle retries.
    fn try_book(&mut self, target: &TargetClass, slot: &Slot) -> Result<Option<StopReason>, ApiError> {
        let key = target.key();
        let retries = self.config.max_retries.max(1);

        for attempt in 1..=retries {
            if self
                .attempts
                .is_exhausted(&key, self.config.max_attempts_per_class)
            {
                tracing::warn!(class = %key, "class reached its booking attempt limit");
                return Ok(None);
            }

            match self.service.book(&slot.id)? {
                BookingOutcome::Booked { booking_id } => {
                    tracing::info!(class = %key, booking_id = %booking_id, "booking confirmed");
                    self.send(Notification::booking_success(slot, &booking_id));
                    self.booked.push(format!("{} ({booking_id})", slot.describe()));
                    self.remove_target(&key, target.weekday);
                    if self.config.stop_after_first_booking {
                        return Ok(Some(StopReason::FirstBookingComplete));
                    }
                    return Ok(None);
                }
                BookingOutcome::Rejected { message } => {
                    let count = self.attempts.record_failure(&key);
                    tracing::warn!(
                        class = %key,
                        attempt,
                        total_failures = count,
                        "booking rejected: {message}"
                    );
                    if attempt < retries && self.shutdown.wait(self.config.retry_delay) {
                        return Ok(Some(StopReason::Cancelled));
                    }
                }
            }
        }
        Ok(None)
    }

    /// A booked class stops being a target; same key on another weekday
    /// keeps watching.
    fn remove_target(&mut self, key: &ClassKey, weekday: Weekday) {
        self.targets
            .retain(|t| t.key() != *key || t.weekday != weekday);
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
