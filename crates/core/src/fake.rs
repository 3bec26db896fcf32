// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles shared across crates via the `test-support` feature.

use crate::api::{ApiError, BookingOutcome, SlotService};
use crate::notify::{Notification, Notifier, NotifyError, NotifyKind};
use crate::slot::{Slot, SlotId};
use chrono::DateTime;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Build a slot from an RFC 3339 start timestamp; panics on a bad input.
#[allow(clippy::unwrap_used)]
pub fn slot_at(
    id: &str,
    name: &str,
    start_rfc3339: &str,
    places_free: u32,
    places_total: u32,
    bookable: bool,
) -> Slot {
    Slot {
        id: SlotId::new(id),
        name: name.to_string(),
        start_at: DateTime::parse_from_rfc3339(start_rfc3339).unwrap(),
        end_at: None,
        location_name: "Main Studio".to_string(),
        instructor_name: None,
        places_free,
        places_total,
        bookable,
    }
}

/// Slot service driven by scripted responses.
///
/// Each fetch and book call pops the next scripted result; exhausted
/// scripts fall back to an empty catalog and a generic rejection.
#[derive(Debug, Default)]
pub struct ScriptedSlotService {
    fetches: VecDeque<Result<Vec<Slot>, ApiError>>,
    bookings: VecDeque<Result<BookingOutcome, ApiError>>,
    pub booked_ids: Vec<SlotId>,
    pub fetch_calls: u32,
}

impl ScriptedSlotService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_fetch(&mut self, result: Result<Vec<Slot>, ApiError>) {
        self.fetches.push_back(result);
    }

    pub fn push_booking(&mut self, result: Result<BookingOutcome, ApiError>) {
        self.bookings.push_back(result);
    }
}

impl SlotService for ScriptedSlotService {
    fn fetch_slots(&mut self, _days_ahead: u32) -> Result<Vec<Slot>, ApiError> {
        self.fetch_calls += 1;
        self.fetches.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn book(&mut self, slot: &SlotId) -> Result<BookingOutcome, ApiError> {
        self.booked_ids.push(slot.clone());
        self.bookings.pop_front().unwrap_or_else(|| {
            Ok(BookingOutcome::Rejected {
                message: "no scripted outcome".to_string(),
            })
        })
    }
}

/// Notifier that records every notification for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn kinds(&self) -> Vec<NotifyKind> {
        self.sent().iter().map(|n| n.kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
        Ok(())
    }
}
