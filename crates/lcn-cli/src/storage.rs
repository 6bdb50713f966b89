//! # Storage Subcommand

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use lcn_client::vc::StoredItem;
use lcn_client::LcnUri;

use crate::{print_json, read_document, ConnectionArgs};

/// Arguments for the `lcn storage` subcommand.
#[derive(Args, Debug)]
pub struct StorageArgs {
    #[command(subcommand)]
    pub command: StorageCommand,
}

/// Storage subcommands.
#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// Store a credential, presentation or JWE. Prints its URI.
    Store {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Fetch whatever a URI points at.
    Resolve { uri: LcnUri },
}

/// Execute the storage subcommand.
pub async fn run_storage(args: &StorageArgs, connection: &ConnectionArgs) -> Result<u8> {
    let client = connection.client()?;
    match &args.command {
        StorageCommand::Store { file } => {
            let item: StoredItem = read_document(file)?;
            let uri = client.storage().store(&item).await?;
            println!("OK: stored {uri}");
            Ok(0)
        }
        StorageCommand::Resolve { uri } => {
            let item = client.storage().resolve(uri).await?;
            print_json(&item)?;
            Ok(0)
        }
    }
}
