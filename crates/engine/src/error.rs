// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use spotwatch_core::LockError;
use thiserror::Error;

/// Failures that abort a monitor run before it can report a stop reason.
///
/// Service errors are absorbed by the loop's cooldown path and never
/// surface here; only local-environment problems do.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Lock(#[from] LockError),
}
