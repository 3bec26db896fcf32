// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Booking attempt accounting.

use crate::target::ClassKey;
use std::collections::BTreeMap;

/// Failed booking calls per class for one monitor run.
///
/// Counters are created lazily and only ever incremented; a class that has
/// reached the configured maximum is excluded from further booking attempts
/// but keeps showing up in monitoring output.
#[derive(Debug, Clone, Default)]
pub struct AttemptCounter {
    counts: BTreeMap<ClassKey, u32>,
}

impl AttemptCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, key: &ClassKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Record one failed booking call; returns the new count
    pub fn record_failure(&mut self, key: &ClassKey) -> u32 {
        let count = self.counts.entry(key.clone()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn is_exhausted(&self, key: &ClassKey, max_attempts: u32) -> bool {
        self.count(key) >= max_attempts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassKey, u32)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}
