// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! spotwatch-client: HTTP access to the gym booking service
//!
//! Implements `spotwatch_core::SlotService` over the remote REST API,
//! manages the OAuth-style token lifecycle, and ships notifications to a
//! Discord-compatible webhook.

pub mod api;
pub mod config;
pub mod token;
pub mod webhook;

pub use api::{ApiClient, Booking};
pub use config::ApiConfig;
pub use token::{AuthError, Credential, TokenStore};
pub use webhook::WebhookNotifier;
