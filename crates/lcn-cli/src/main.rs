//! # lcn CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lcn_cli::boost::{run_boost, BoostArgs};
use lcn_cli::credential::{run_credential, CredentialArgs};
use lcn_cli::did_metadata::{run_did_metadata, DidMetadataArgs};
use lcn_cli::exchange::{run_exchange, ExchangeArgs};
use lcn_cli::health::{run_health, HealthArgs};
use lcn_cli::profile::{run_profile, ProfileArgs};
use lcn_cli::storage::{run_storage, StorageArgs};
use lcn_cli::ConnectionArgs;

/// LearnCard Network command-line client.
///
/// Manages profiles, boosts, credentials, stored items, DID metadata and
/// workflow exchanges through the network's HTTP API.
#[derive(Parser, Debug)]
#[command(name = "lcn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Own profile, search, connections, invites and signing authorities.
    Profile(ProfileArgs),

    /// Create, inspect and send boosts.
    Boost(BoostArgs),

    /// Send, accept, list, issue and verify credentials.
    Credential(CredentialArgs),

    /// Store items and resolve URIs.
    Storage(StorageArgs),

    /// Fragments of the caller's DID document.
    #[command(name = "did-metadata")]
    DidMetadata(DidMetadataArgs),

    /// Exchange ids and workflow exchanges.
    Exchange(ExchangeArgs),

    /// API reachability.
    Health(HealthArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(api_url = %cli.connection.api_url, "lcn CLI starting");

    let connection = &cli.connection;
    let result = match &cli.command {
        Commands::Profile(args) => run_profile(args, connection).await,
        Commands::Boost(args) => run_boost(args, connection).await,
        Commands::Credential(args) => run_credential(args, connection).await,
        Commands::Storage(args) => run_storage(args, connection).await,
        Commands::DidMetadata(args) => run_did_metadata(args, connection).await,
        Commands::Exchange(args) => run_exchange(args, connection).await,
        Commands::Health(args) => run_health(args, connection).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
