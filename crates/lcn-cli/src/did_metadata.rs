//! # DID Metadata Subcommand
//!
//! Manage the fragments merged into the caller's DID document.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use lcn_client::did_metadata::DidMetadata;

use crate::{print_json, print_optional, read_document, report, ConnectionArgs};

/// Arguments for the `lcn did-metadata` subcommand.
#[derive(Args, Debug)]
pub struct DidMetadataArgs {
    #[command(subcommand)]
    pub command: DidMetadataCommand,
}

/// DID metadata subcommands.
#[derive(Subcommand, Debug)]
pub enum DidMetadataCommand {
    /// Add a fragment from a JSON or YAML document.
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show one fragment.
    Get { id: String },

    /// List the caller's fragments.
    Mine,

    /// Replace members of a fragment.
    Update {
        id: String,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Delete a fragment.
    Delete { id: String },
}

/// Execute the did-metadata subcommand.
pub async fn run_did_metadata(args: &DidMetadataArgs, connection: &ConnectionArgs) -> Result<u8> {
    let client = connection.client()?;
    let metadata = client.did_metadata();
    match &args.command {
        DidMetadataCommand::Add { file } => {
            let fragment: DidMetadata = read_document(file)?;
            let ok = metadata.add_did_metadata(&fragment).await?;
            Ok(report(ok, &format!("added DID metadata from {}", file.display())))
        }
        DidMetadataCommand::Get { id } => {
            let fragment = metadata.get_did_metadata(id).await?;
            print_optional(fragment.as_ref(), &format!("DID metadata {id}"))
        }
        DidMetadataCommand::Mine => {
            let records = metadata.get_my_did_metadata().await?;
            print_json(&records)?;
            Ok(0)
        }
        DidMetadataCommand::Update { id, file } => {
            let updates: DidMetadata = read_document(file)?;
            let ok = metadata.update_did_metadata(id, &updates).await?;
            Ok(report(ok, &format!("updated DID metadata {id}")))
        }
        DidMetadataCommand::Delete { id } => {
            let ok = metadata.delete_did_metadata(id).await?;
            Ok(report(ok, &format!("deleted DID metadata {id}")))
        }
    }
}
