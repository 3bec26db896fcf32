// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for the blocking monitor loop.
//!
//! Every pause in the loop goes through [`ShutdownSignal::wait`], so a
//! Ctrl-C lands within channel latency instead of waiting out a poll
//! interval. The signal latches: once triggered it stays triggered.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Create a linked handle/signal pair.
pub fn shutdown_channel() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = bounded(1);
    let handle = ShutdownHandle { tx: tx.clone() };
    let signal = ShutdownSignal {
        rx,
        _keepalive: tx,
        triggered: false,
    };
    (handle, signal)
}

/// Requests shutdown; safe to call from a signal handler thread.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl ShutdownHandle {
    pub fn trigger(&self) {
        // Full channel means a trigger is already pending
        let _ = self.tx.try_send(());
    }
}

/// Consumed by the monitor loop; owned by exactly one thread.
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: Receiver<()>,
    // Keeps the channel connected even if every handle is dropped
    _keepalive: Sender<()>,
    triggered: bool,
}

impl ShutdownSignal {
    /// Non-blocking check.
    pub fn is_triggered(&mut self) -> bool {
        if !self.triggered && self.rx.try_recv().is_ok() {
            self.triggered = true;
        }
        self.triggered
    }

    /// Sleep for `timeout` unless shutdown arrives first.
    /// Returns true when shutdown was requested.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if self.triggered {
            return true;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(()) => {
                self.triggered = true;
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
