//! Shared helpers for CLI specs.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use predicates::prelude::*;

/// Temporary working directory holding a config file and state files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn lock_file(&self) -> PathBuf {
        self.dir.path().join("spotwatch.lock")
    }

    /// A complete config pointing at an unroutable endpoint, with one
    /// target and a zero runtime budget so `run` stops immediately.
    pub fn config(&self) -> PathBuf {
        let dir = self.dir.path().display();
        self.file(
            "spotwatch.toml",
            &format!(
                r#"
                [api]
                base_url = "http://127.0.0.1:9"
                user_account_id = "acct-1"
                client_id = "cid"
                client_secret = "secret"
                device_id = "dev-1"
                app_name = "gym-app"
                appspace_id = "space-1"
                user_agent = "gym-app/1.0"
                token_file = "{dir}/tokens.json"
                request_timeout = "1s"

                [monitor]
                max_runtime = "0s"
                error_cooldown = "0s"
                target_delay = "0s"
                lock_file = "{dir}/spotwatch.lock"

                [[targets]]
                name = "yoga"
                time = "09:30"
                weekday = 5
                "#
            ),
        )
    }

    /// Same endpoint settings but no targets.
    pub fn config_without_targets(&self) -> PathBuf {
        let dir = self.dir.path().display();
        self.file(
            "spotwatch.toml",
            &format!(
                r#"
                [api]
                base_url = "http://127.0.0.1:9"
                user_account_id = "acct-1"
                client_id = "cid"
                client_secret = "secret"
                device_id = "dev-1"
                app_name = "gym-app"
                appspace_id = "space-1"
                user_agent = "gym-app/1.0"
                token_file = "{dir}/tokens.json"
                "#
            ),
        )
    }
}

pub fn spotwatch() -> Command {
    Command::cargo_bin("spotwatch").unwrap()
}
