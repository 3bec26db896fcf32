// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote slot service abstraction.
//!
//! The monitor only sees this trait; the HTTP implementation lives in the
//! client crate and test doubles live in [`crate::fake`].

use crate::slot::{Slot, SlotId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Credentials could not be refreshed; monitoring cannot continue.
    #[error("authentication expired: {0}")]
    AuthExpired(String),

    /// The catalog request for one target failed; other targets may still
    /// be serviceable this cycle.
    #[error("catalog request failed with HTTP {status}: {message}")]
    Catalog { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Whether the failure is scoped to a single target rather than the
    /// whole cycle.
    pub fn is_per_target(&self) -> bool {
        matches!(self, Self::Catalog { .. })
    }
}

/// Terminal result of one booking call.
///
/// A rejection is a normal protocol outcome (slot taken, already booked),
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked { booking_id: String },
    Rejected { message: String },
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, Self::Booked { .. })
    }
}

pub trait SlotService {
    /// Fetch all slots within the next `days_ahead` days.
    fn fetch_slots(&mut self, days_ahead: u32) -> Result<Vec<Slot>, ApiError>;

    /// Attempt to book the slot; races against other members.
    fn book(&mut self, slot: &SlotId) -> Result<BookingOutcome, ApiError>;
}
