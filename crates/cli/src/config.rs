// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level TOML configuration file.

use anyhow::{Context, Result};
use serde::Deserialize;
use spotwatch_client::ApiConfig;
use spotwatch_core::{MonitorConfig, TargetClass};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NotifySettings {
    /// Discord-compatible webhook; log-only notifications when unset
    #[serde(default)]
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub targets: Vec<TargetClass>,
    #[serde(default)]
    pub notify: NotifySettings,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}
