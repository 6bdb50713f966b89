//! # Exchange Subcommand
//!
//! Exchange id encoding runs offline; `participate` talks to the
//! workflow routes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use lcn_client::vc::VerifiablePresentation;
use lcn_client::workflows::ExchangeId;
use lcn_client::LcnUri;

use crate::{print_json, read_document, ConnectionArgs};

/// Arguments for the `lcn exchange` subcommand.
#[derive(Args, Debug)]
pub struct ExchangeArgs {
    #[command(subcommand)]
    pub command: ExchangeCommand,
}

/// Exchange subcommands.
#[derive(Subcommand, Debug)]
pub enum ExchangeCommand {
    /// Mint an exchange id for a boost with a fresh challenge.
    Encode { boost_uri: LcnUri },

    /// Show the boost URI and challenge inside an exchange id.
    Decode { exchange_id: String },

    /// Initiate an exchange, or complete it with `--presentation`.
    Participate {
        workflow_id: String,
        exchange_id: String,
        #[arg(long, value_name = "FILE")]
        presentation: Option<PathBuf>,
    },
}

/// Execute the exchange subcommand.
pub async fn run_exchange(args: &ExchangeArgs, connection: &ConnectionArgs) -> Result<u8> {
    match &args.command {
        ExchangeCommand::Encode { boost_uri } => {
            println!("{}", ExchangeId::new(boost_uri.as_str()));
            Ok(0)
        }
        ExchangeCommand::Decode { exchange_id } => {
            let decoded = ExchangeId::decode(exchange_id.trim())
                .with_context(|| format!("invalid exchange id: {exchange_id}"))?;
            print_json(&decoded)?;
            Ok(0)
        }
        ExchangeCommand::Participate {
            workflow_id,
            exchange_id,
            presentation,
        } => {
            let presentation: Option<VerifiablePresentation> = presentation
                .as_deref()
                .map(read_document::<VerifiablePresentation>)
                .transpose()?;
            let client = connection.client()?;
            let response = client
                .workflows()
                .participate_in_exchange(workflow_id, exchange_id, presentation.as_ref())
                .await?;
            print_json(&response)?;
            Ok(0)
        }
    }
}
