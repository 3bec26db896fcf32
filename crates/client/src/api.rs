// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the slot service.
//!
//! Non-2xx statuses are data here, not transport failures: a rejected
//! booking is a normal race outcome and a failed catalog request only
//! skips one target. The agent is built with status-as-error disabled so
//! both paths stay on the `Ok` branch.

use crate::config::ApiConfig;
use crate::token::{AuthError, TokenStore};
use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;
use spotwatch_core::{ApiError, BookingOutcome, Slot, SlotId, SlotService};
use std::time::Duration;

/// Blocking agent shared by the client and the token store.
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build();
    ureq::Agent::new_with_config(config)
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Transport(message) => ApiError::Transport(message),
            other => ApiError::AuthExpired(other.to_string()),
        }
    }
}

/// An existing booking as reported by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Booking {
    pub fn describe(&self) -> String {
        let id = id_string(&self.id).unwrap_or_else(|| "?".to_string());
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        let when = self.start_date.as_deref().unwrap_or("?");
        match &self.status {
            Some(status) => format!("{id}  {name}  {when}  [{status}]"),
            None => format!("{id}  {name}  {when}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SlotsPage {
    #[serde(default)]
    items: Vec<SlotItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamedRef {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotItem {
    id: serde_json::Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    activity: Option<NamedRef>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    location: Option<NamedRef>,
    #[serde(default)]
    instructor: Option<NamedRef>,
    #[serde(default)]
    places_free: Option<u32>,
    #[serde(default)]
    places_total: Option<u32>,
    #[serde(default)]
    bookable: Option<bool>,
}

/// Ids arrive as strings or numbers depending on the endpoint
fn id_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl SlotItem {
    /// Convert one catalog item, or None when it cannot identify a
    /// bookable slot. Malformed items are logged and skipped rather than
    /// failing the whole page.
    fn into_slot(self) -> Option<Slot> {
        let id = match id_string(&self.id) {
            Some(id) => id,
            None => {
                tracing::warn!("skipping catalog item without usable id");
                return None;
            }
        };

        let raw_start = self.start_date.or(self.start_time);
        let start_at = match raw_start.as_deref().map(DateTime::parse_from_rfc3339) {
            Some(Ok(start)) => start,
            Some(Err(error)) => {
                tracing::warn!(slot = %id, error = %error, "skipping catalog item with bad start timestamp");
                return None;
            }
            None => {
                tracing::warn!(slot = %id, "skipping catalog item without start timestamp");
                return None;
            }
        };

        let end_at = self
            .end_date
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok());

        let name = self
            .name
            .or(self.activity.and_then(|a| a.name))
            .unwrap_or_default();

        Some(Slot {
            id: SlotId::new(&id),
            name,
            start_at,
            end_at,
            location_name: self
                .location
                .and_then(|l| l.name)
                .unwrap_or_default(),
            instructor_name: self.instructor.and_then(|i| i.name),
            places_free: self.places_free.unwrap_or(0),
            places_total: self.places_total.unwrap_or(0),
            bookable: self.bookable.unwrap_or(true),
        })
    }
}

/// Only slots starting between now and the horizon are worth matching
fn within_window(slot: &Slot, now: DateTime<FixedOffset>, days_ahead: u32) -> bool {
    let horizon = now + chrono::Duration::days(i64::from(days_ahead));
    slot.start_at >= now && slot.start_at <= horizon
}

/// Best-effort error text out of a response body
fn parse_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("HTTP {status}")
}

pub struct ApiClient {
    config: ApiConfig,
    tokens: TokenStore,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn open(config: ApiConfig) -> Result<Self, AuthError> {
        let agent = build_agent(config.request_timeout);
        let tokens = TokenStore::open(config.clone(), agent.clone())?;
        Ok(Self {
            config,
            tokens,
            agent,
        })
    }

    pub fn tokens_mut(&mut self) -> &mut TokenStore {
        &mut self.tokens
    }

    fn get(&mut self, url: &str) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        let token = self.tokens.access_token()?;
        let mut builder = self.agent.get(url);
        for (name, value) in self.config.headers() {
            builder = builder.header(name, &value);
        }
        builder
            .header("authorization", &format!("Bearer {token}"))
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    fn post(&mut self, url: &str) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        let token = self.tokens.access_token()?;
        let mut builder = self.agent.post(url);
        for (name, value) in self.config.headers() {
            builder = builder.header(name, &value);
        }
        builder
            .header("authorization", &format!("Bearer {token}"))
            .send_empty()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Cancel an existing booking by its id.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<(), ApiError> {
        let url = self.config.cancel_url(booking_id);
        let mut response = self.post(&url)?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Err(ApiError::Catalog {
            status,
            message: parse_error_message(&body, status),
        })
    }

    /// List the account's current bookings.
    pub fn my_bookings(&mut self) -> Result<Vec<Booking>, ApiError> {
        let url = self.config.bookings_url();
        let mut response = self.get(&url)?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(ApiError::Catalog {
                status,
                message: parse_error_message(&body, status),
            });
        }
        // The list arrives bare or wrapped in `items` depending on the
        // service version
        let value: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        let list = match value.get("items") {
            Some(items) => items.clone(),
            None => value,
        };
        serde_json::from_value(list).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

impl SlotService for ApiClient {
    fn fetch_slots(&mut self, days_ahead: u32) -> Result<Vec<Slot>, ApiError> {
        let now = Local::now().fixed_offset();
        let from = now.format("%Y-%m-%d").to_string();
        let url = self.config.slots_url(&from);

        let mut response = self.get(&url)?;
        let status = response.status().as_u16();
        if status == 401 || status == 403 {
            return Err(ApiError::AuthExpired(format!("catalog returned HTTP {status}")));
        }
        if !(200..300).contains(&status) {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(ApiError::Catalog {
                status,
                message: parse_error_message(&body, status),
            });
        }

        let page: SlotsPage = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        let slots: Vec<Slot> = page
            .items
            .into_iter()
            .filter_map(SlotItem::into_slot)
            .filter(|slot| within_window(slot, now, days_ahead))
            .collect();
        tracing::debug!(count = slots.len(), days_ahead, "fetched slot catalog");
        Ok(slots)
    }

    fn book(&mut self, slot: &SlotId) -> Result<BookingOutcome, ApiError> {
        let url = self.config.book_url(&slot.0);
        let mut response = self.post(&url)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        if (200..300).contains(&status) {
            let booking_id = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("bookingId")
                        .or_else(|| value.get("id"))
                        .and_then(id_string)
                })
                .unwrap_or_else(|| "unknown".to_string());
            return Ok(BookingOutcome::Booked { booking_id });
        }

        Ok(BookingOutcome::Rejected {
            message: parse_error_message(&body, status),
        })
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
