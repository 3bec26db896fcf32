// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discord-compatible webhook notification sink.

use crate::api::build_agent;
use serde_json::json;
use spotwatch_core::{Notification, Notifier, NotifyError, NotifyKind};
use std::time::Duration;

fn embed_color(kind: NotifyKind) -> u32 {
    match kind {
        NotifyKind::MonitoringStarted => 0x3498db,
        NotifyKind::SpotAvailable => 0xf1c40f,
        NotifyKind::BookingSuccess => 0x2ecc71,
        NotifyKind::Error => 0xe74c3c,
        NotifyKind::MonitoringStopped => 0x95a5a6,
    }
}

fn embed_payload(notification: &Notification) -> serde_json::Value {
    let fields: Vec<serde_json::Value> = notification
        .fields
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value, "inline": true }))
        .collect();
    json!({
        "embeds": [{
            "title": notification.title,
            "description": notification.message,
            "color": embed_color(notification.kind),
            "fields": fields,
        }]
    })
}

/// Posts each notification as a single embed.
pub struct WebhookNotifier {
    url: String,
    agent: ureq::Agent,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: build_agent(Duration::from_secs(10)),
        }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let response = self
            .agent
            .post(&self.url)
            .send_json(embed_payload(notification))
            .map_err(|e| NotifyError::Failed(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(NotifyError::Failed(format!("webhook returned HTTP {status}")))
        }
    }
}
