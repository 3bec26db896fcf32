// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory run lock preventing concurrent monitor instances.
//!
//! A cooperative JSON marker file, not an OS-level lock: every participant
//! checks it voluntarily before polling or booking anything. Staleness is
//! judged by the file's modification time. Single-host only; a multi-host
//! deployment needs a real distributed lock instead.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    /// A fresh lock belongs to another instance; the caller must exit
    /// without side effects.
    #[error("another monitor instance holds the run lock at {0}")]
    Contended(PathBuf),

    #[error("run lock io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("run lock encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Contents of the lock marker file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLock {
    pub pid: u32,
    pub start_time: DateTime<FixedOffset>,
    pub target_classes: usize,
}

/// Holds the on-disk lock; the marker file is removed on drop.
#[derive(Debug)]
pub struct RunLockGuard {
    path: PathBuf,
}

impl RunLockGuard {
    /// Acquire the lock, replacing a marker whose mtime is older than
    /// `stale_after`. A fresh marker means another instance is running.
    pub fn acquire(
        path: &Path,
        stale_after: Duration,
        target_classes: usize,
        started: DateTime<FixedOffset>,
    ) -> Result<Self, LockError> {
        let io_err = |source| LockError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let metadata = fs::metadata(path).map_err(io_err)?;
            // An unreadable or future mtime counts as fresh
            let age = metadata.modified().ok().and_then(|m| m.elapsed().ok());
            match age {
                Some(age) if age > stale_after => {
                    fs::remove_file(path).map_err(io_err)?;
                    tracing::warn!(path = %path.display(), age_secs = age.as_secs(), "removed stale run lock");
                }
                _ => return Err(LockError::Contended(path.to_path_buf())),
            }
        }

        let lock = RunLock {
            pid: std::process::id(),
            start_time: started,
            target_classes,
        };
        fs::write(path, serde_json::to_string_pretty(&lock)?).map_err(io_err)?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLockGuard {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %error, "failed to remove run lock");
        }
    }
}

#[cfg(test)]
#[path = "runlock_tests.rs"]
mod tests;
