// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.

use crate::config::Config;
use anyhow::{bail, Result};
use spotwatch_client::{ApiClient, WebhookNotifier};
use spotwatch_core::{
    BookingOutcome, FanoutNotifier, LogNotifier, SlotId, SlotService, SystemClock,
};
use spotwatch_engine::{shutdown_channel, Monitor};

fn open_client(config: &Config) -> Result<ApiClient> {
    Ok(ApiClient::open(config.api.clone())?)
}

/// Monitor target classes until a stop condition is reached.
pub fn run(config: Config) -> Result<()> {
    if config.targets.is_empty() {
        bail!("no [[targets]] configured; nothing to monitor");
    }

    let mut notifier = FanoutNotifier::new();
    notifier.push(Box::new(LogNotifier));
    if let Some(url) = &config.notify.webhook_url {
        notifier.push(Box::new(WebhookNotifier::new(url)));
    }

    let client = open_client(&config)?;
    let (handle, signal) = shutdown_channel();
    ctrlc::set_handler(move || handle.trigger())?;

    let mut monitor = Monitor::new(
        client,
        notifier,
        SystemClock,
        config.monitor,
        config.targets,
        signal,
    );
    let report = monitor.run()?;

    println!(
        "stopped: {} after {} cycle(s)",
        report.reason.describe(),
        report.cycles
    );
    for line in &report.booked {
        println!("booked: {line}");
    }
    Ok(())
}

/// Print the upcoming catalog, soonest first.
pub fn classes(config: Config, days: u32) -> Result<()> {
    let mut client = open_client(&config)?;
    let mut slots = client.fetch_slots(days)?;
    slots.sort_by_key(|slot| slot.start_at);

    if slots.is_empty() {
        println!("no classes in the next {days} day(s)");
        return Ok(());
    }
    for slot in slots {
        println!(
            "{}  {}  {}",
            slot.id,
            slot.start_at.format("%Y-%m-%d"),
            slot.describe()
        );
    }
    Ok(())
}

/// One-shot booking of a specific slot.
pub fn book(config: Config, slot_id: &str) -> Result<()> {
    let mut client = open_client(&config)?;
    match client.book(&SlotId::new(slot_id))? {
        BookingOutcome::Booked { booking_id } => {
            println!("booked slot {slot_id} (booking {booking_id})");
            Ok(())
        }
        BookingOutcome::Rejected { message } => bail!("booking rejected: {message}"),
    }
}

pub fn cancel(config: Config, booking_id: &str) -> Result<()> {
    let mut client = open_client(&config)?;
    client.cancel_booking(booking_id)?;
    println!("cancelled booking {booking_id}");
    Ok(())
}

pub fn bookings(config: Config) -> Result<()> {
    let mut client = open_client(&config)?;
    let bookings = client.my_bookings()?;
    if bookings.is_empty() {
        println!("no bookings");
        return Ok(());
    }
    for booking in bookings {
        println!("{}", booking.describe());
    }
    Ok(())
}

/// Exchange an identity request token and persist the credential.
pub fn login(config: Config, username: &str, identity_request: &str) -> Result<()> {
    let mut client = open_client(&config)?;
    client.tokens_mut().login(username, identity_request)?;
    println!("credentials stored in {}", config.api.token_file.display());
    Ok(())
}
