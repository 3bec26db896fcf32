// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! spotwatch - gym class availability monitor and booking bot

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spotwatch",
    version,
    about = "Watches gym class schedules and races bookings when spots open up"
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "spotwatch.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monitor target classes and book spots as they open
    Run,
    /// List upcoming classes from the catalog
    Classes {
        /// How many days ahead to list
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Book a specific slot by id
    Book { slot_id: String },
    /// Cancel an existing booking
    Cancel { booking_id: String },
    /// List current bookings
    Bookings,
    /// Exchange an identity request token for stored credentials
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        identity_request: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = config::Config::load(&cli.config)?;

    match cli.command {
        Commands::Run => commands::run(config),
        Commands::Classes { days } => commands::classes(config, days),
        Commands::Book { slot_id } => commands::book(config, &slot_id),
        Commands::Cancel { booking_id } => commands::cancel(config, &booking_id),
        Commands::Bookings => commands::bookings(config),
        Commands::Login {
            username,
            identity_request,
        } => commands::login(config, &username, &identity_request),
    }
}
