//! CLI module for the dashboard service
//!
//! Runs the HTTP server by default, or performs a single snapshot fetch or
//! payout against the configured endpoint without starting the server.

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    configuration::{get_configuration, set_configuration, Config, State},
    error::Error,
    model::{ConnectionState, PayoutAction},
};

/// World 8 dashboard data service
#[derive(Parser)]
#[command(name = "w8-dashboard")]
#[command(about = "World 8 NFT dashboard data service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server (default if no command specified)
    Serve,

    /// Connect once and print a dashboard snapshot as JSON
    Snapshot {
        /// Use the mainnet endpoint instead of the local replica
        #[arg(long)]
        remote: bool,
    },

    /// Connect and trigger a payout run
    Payout {
        /// Use the mainnet endpoint instead of the local replica
        #[arg(long)]
        remote: bool,

        /// Force a payout regardless of schedule
        #[arg(long)]
        force: bool,
    },
}

/// Initialize configuration and return Config
pub fn init_config() -> Result<Config, Error> {
    set_configuration()?;
    get_configuration()
}

async fn connected_state(remote: bool) -> Result<State, Error> {
    let config = init_config()?;
    let state = State::new(config)?;

    let connection = state.adapter.connect(!remote).await;
    info!("Connection state: {}", connection);

    Ok(state)
}

/// Prints one snapshot. Falls back to the mock dataset like the dashboard
/// does when the endpoint is unreachable.
pub async fn run_snapshot(remote: bool) -> Result<(), Error> {
    let state = connected_state(remote).await?;
    let snapshot = state.adapter.fetch_snapshot().await;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

pub async fn run_payout(remote: bool, force: bool) -> Result<(), Error> {
    let state = connected_state(remote).await?;

    if state.adapter.state().await != ConnectionState::Connected {
        let status = state.adapter.connection_status().await;
        return Err(Error::Connection(
            status
                .last_error
                .unwrap_or_else(|| String::from("endpoint unreachable")),
        ));
    }

    let action = if force {
        PayoutAction::ForcePayout
    } else {
        PayoutAction::ProcessPayouts
    };
    let outcome = state.adapter.process_action(action).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
