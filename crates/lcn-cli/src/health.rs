//! # Health Subcommand
//!
//! Reachability of the network API. Works without a token; with one it
//! also prints the network's DID.

use anyhow::{Context, Result};
use clap::Args;

use lcn_client::LcnClient;

use crate::ConnectionArgs;

/// Arguments for the `lcn health` subcommand.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Also fetch the network DID (needs a token).
    #[arg(long)]
    pub did: bool,
}

/// Execute the health subcommand.
pub async fn run_health(args: &HealthArgs, connection: &ConnectionArgs) -> Result<u8> {
    let config = connection.config(args.did)?;
    let client = LcnClient::new(config).context("failed to build LearnCard Network client")?;

    let result = client.health_check().await;
    for service in &result.reachable {
        println!("OK: {service} reachable");
    }
    for (service, reason) in &result.unreachable {
        println!("FAIL: {service} unreachable: {reason}");
    }
    if !result.all_healthy() {
        return Ok(1);
    }

    if args.did {
        let did = client.utilities().get_did().await?;
        println!("OK: network DID {did}");
    }
    Ok(0)
}
