// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote service endpoints and identification headers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Connection settings for the booking service.
///
/// The service authenticates devices, not just accounts, so every request
/// carries the app identity headers alongside the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_account_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub device_id: String,
    pub app_name: String,
    pub appspace_id: String,
    pub user_agent: String,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from("tokens.json")
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl ApiConfig {
    fn account_url(&self, tail: &str) -> String {
        format!(
            "{}/members/v2/user_accounts/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.user_account_id,
            tail
        )
    }

    /// Slot catalog starting at `from` (YYYY-MM-DD)
    pub fn slots_url(&self, from: &str) -> String {
        self.account_url(&format!("bookings/slots?from={from}"))
    }

    pub fn book_url(&self, slot_id: &str) -> String {
        self.account_url(&format!("bookings/slots/{slot_id}/book"))
    }

    pub fn cancel_url(&self, booking_id: &str) -> String {
        self.account_url(&format!("bookings/{booking_id}/cancel"))
    }

    pub fn bookings_url(&self) -> String {
        self.account_url("bookings")
    }

    pub fn token_url(&self) -> String {
        format!("{}/auth/v2/token", self.base_url.trim_end_matches('/'))
    }

    /// Identification headers sent with every request
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("x-app-name", self.app_name.clone()),
            ("x-appspace-id", self.appspace_id.clone()),
            ("x-device-remoteid", self.device_id.clone()),
            ("x-timezone", self.timezone.clone()),
            ("user-agent", self.user_agent.clone()),
            ("accept", "application/json".to_string()),
        ];
        if let Some(version) = &self.app_version {
            headers.push(("x-app-version", version.clone()));
        }
        headers
    }
}
