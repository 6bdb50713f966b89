//! # Boost Subcommand
//!
//! Inspect, create and send boosts.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use lcn_client::boosts::{CreateBoostRequest, RecipientOptions, SendBoostRequest};
use lcn_client::{LcnUri, PaginationOptions};

use crate::{print_json, print_optional, read_document, report, ConnectionArgs};

/// Arguments for the `lcn boost` subcommand.
#[derive(Args, Debug)]
pub struct BoostArgs {
    #[command(subcommand)]
    pub command: BoostCommand,
}

/// Boost subcommands.
#[derive(Subcommand, Debug)]
pub enum BoostCommand {
    /// Show one boost.
    Get { uri: LcnUri },

    /// List the caller's boosts.
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Create a boost from a document holding `credential` plus metadata.
    Create {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Send a boost.
    ///
    /// Either `--uri` sends an existing boost, or `--file` sends a full
    /// send request document.
    Send {
        /// Profile id, DID, email address or phone number.
        #[arg(long, required_unless_present = "file")]
        to: Option<String>,
        #[arg(long, conflicts_with = "file")]
        uri: Option<LcnUri>,
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List who received a boost.
    Recipients {
        uri: LcnUri,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Delete a boost.
    Delete { uri: LcnUri },
}

/// Execute the boost subcommand.
pub async fn run_boost(args: &BoostArgs, connection: &ConnectionArgs) -> Result<u8> {
    let client = connection.client()?;
    let boosts = client.boosts();
    match &args.command {
        BoostCommand::Get { uri } => {
            let boost = boosts.get_boost(uri).await?;
            print_optional(boost.as_ref(), &format!("boost {uri}"))
        }
        BoostCommand::List { limit, cursor } => {
            let options = PaginationOptions {
                limit: *limit,
                cursor: cursor.clone(),
            };
            let page = boosts.get_paginated_boosts(&options, None).await?;
            print_json(&page)?;
            Ok(0)
        }
        BoostCommand::Create { file } => {
            let request: CreateBoostRequest = read_document(file)?;
            let uri = boosts.create_boost(&request).await?;
            println!("OK: created boost {uri}");
            Ok(0)
        }
        BoostCommand::Send { to, uri, file } => {
            let request = send_request(to.as_deref(), uri.as_ref(), file.as_deref())?;
            let sent = boosts.send_boost(&request).await?;
            print_json(&sent)?;
            Ok(0)
        }
        BoostCommand::Recipients { uri, limit, cursor } => {
            let options = RecipientOptions {
                page: PaginationOptions {
                    limit: *limit,
                    cursor: cursor.clone(),
                },
                ..Default::default()
            };
            let page = boosts.get_boost_recipients(uri, &options).await?;
            print_json(&page)?;
            Ok(0)
        }
        BoostCommand::Delete { uri } => {
            let ok = boosts.delete_boost(uri).await?;
            Ok(report(ok, &format!("deleted boost {uri}")))
        }
    }
}

/// Build the send request from flags or a document. `--to` overrides the
/// document's recipient.
fn send_request(
    to: Option<&str>,
    uri: Option<&LcnUri>,
    file: Option<&std::path::Path>,
) -> Result<SendBoostRequest> {
    match (file, uri, to) {
        (Some(file), _, to) => {
            let mut request: SendBoostRequest = read_document(file)?;
            if let Some(to) = to {
                request.recipient = to.to_string();
            }
            Ok(request)
        }
        (None, Some(uri), Some(to)) => Ok(SendBoostRequest::from_template_uri(to, uri.as_str())),
        (None, None, _) => bail!("either --uri or --file is required"),
        (None, Some(_), None) => bail!("--to is required with --uri"),
    }
}
