// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification surface for monitor events.
//!
//! The monitor emits [`Notification`] values and a [`Notifier`] delivers
//! them. Delivery failures never interrupt monitoring; a failing sink is
//! logged and skipped.

use crate::slot::Slot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Failed(String),
}

/// Event category, used for routing and formatting by sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    MonitoringStarted,
    SpotAvailable,
    BookingSuccess,
    Error,
    MonitoringStopped,
}

impl NotifyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MonitoringStarted => "monitoring:started",
            Self::SpotAvailable => "spot:available",
            Self::BookingSuccess => "booking:success",
            Self::Error => "error",
            Self::MonitoringStopped => "monitoring:stopped",
        }
    }
}

/// One monitor event, already formatted for human consumption.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotifyKind,
    pub title: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl Notification {
    pub fn new(kind: NotifyKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn monitoring_started(target_count: usize) -> Self {
        Self::new(
            NotifyKind::MonitoringStarted,
            "Monitoring started",
            format!("Watching {target_count} target class(es) for open spots"),
        )
    }

    pub fn spot_available(slot: &Slot) -> Self {
        let mut notification = Self::new(
            NotifyKind::SpotAvailable,
            "Spot available",
            format!("{} has open places", slot.name),
        )
        .with_field("class", slot.name.clone())
        .with_field("time", slot.start_at.format("%a %Y-%m-%d %H:%M").to_string())
        .with_field("location", slot.location_name.clone())
        .with_field(
            "spots",
            format!("{}/{}", slot.places_free, slot.places_total),
        );
        if let Some(instructor) = &slot.instructor_name {
            notification = notification.with_field("instructor", instructor.clone());
        }
        notification
    }

    pub fn booking_success(slot: &Slot, booking_id: &str) -> Self {
        Self::new(
            NotifyKind::BookingSuccess,
            "Booking confirmed",
            format!("Booked {}", slot.describe()),
        )
        .with_field("booking_id", booking_id.to_string())
    }

    pub fn error(context: &str, message: &str) -> Self {
        Self::new(NotifyKind::Error, format!("Error: {context}"), message.to_string())
    }

    pub fn monitoring_stopped(reason: &str) -> Self {
        Self::new(NotifyKind::MonitoringStopped, "Monitoring stopped", reason.to_string())
    }
}

pub trait Notifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Sink that writes notifications to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        match notification.kind {
            NotifyKind::Error => tracing::warn!(
                event = notification.kind.label(),
                title = %notification.title,
                "{}",
                notification.message
            ),
            _ => tracing::info!(
                event = notification.kind.label(),
                title = %notification.title,
                "{}",
                notification.message
            ),
        }
        Ok(())
    }
}

/// Delivers each notification to every registered sink.
///
/// A sink error is logged and the remaining sinks still run.
#[derive(Default)]
pub struct FanoutNotifier {
    sinks: Vec<Box<dyn Notifier + Send + Sync>>,
}

impl FanoutNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: Box<dyn Notifier + Send + Sync>) {
        self.sinks.push(sink);
    }
}

impl Notifier for FanoutNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        for sink in &self.sinks {
            if let Err(error) = sink.notify(notification) {
                tracing::warn!(
                    event = notification.kind.label(),
                    error = %error,
                    "notification sink failed"
                );
            }
        }
        Ok(())
    }
}
