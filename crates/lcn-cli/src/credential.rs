//! # Credential Subcommand
//!
//! Send, accept, list, issue and verify credentials.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use lcn_client::credentials::{
    AcceptCredentialRequest, IssueCredentialRequest, SendCredentialRequest, SigningAuthorityRef,
};
use lcn_client::vc::{CredentialPayload, UnsignedCredential, VerifiableCredential};
use lcn_client::{LcnUri, ProfileId};

use crate::{print_json, read_document, report, ConnectionArgs};

/// Arguments for the `lcn credential` subcommand.
#[derive(Args, Debug)]
pub struct CredentialArgs {
    #[command(subcommand)]
    pub command: CredentialCommand,
}

/// Which delivery list to show.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mailbox {
    Received,
    Sent,
    Incoming,
}

/// Credential subcommands.
#[derive(Subcommand, Debug)]
pub enum CredentialCommand {
    /// Send a signed, unsigned or encrypted credential to a profile.
    Send {
        profile_id: ProfileId,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Accept a credential sent to the caller.
    Accept { uri: LcnUri },

    /// List deliveries.
    List {
        #[arg(value_enum)]
        mailbox: Mailbox,
        #[arg(long)]
        limit: Option<u32>,
        /// Sender (received, incoming) or recipient (sent) profile id.
        #[arg(long)]
        with: Option<String>,
    },

    /// Sign an unsigned credential with one of the caller's signing authorities.
    Issue {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Signing authority endpoint; the primary authority is used when omitted.
        #[arg(long, requires = "sa_name")]
        sa_endpoint: Option<String>,
        #[arg(long, requires = "sa_endpoint")]
        sa_name: Option<String>,
    },

    /// Verify a signed credential.
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Delete a credential.
    Delete { uri: LcnUri },
}

/// Execute the credential subcommand.
pub async fn run_credential(args: &CredentialArgs, connection: &ConnectionArgs) -> Result<u8> {
    let client = connection.client()?;
    let credentials = client.credentials();
    match &args.command {
        CredentialCommand::Send { profile_id, file } => {
            let credential: CredentialPayload = read_document(file)?;
            let request = SendCredentialRequest {
                credential,
                metadata: None,
            };
            let uri = credentials.send_credential(profile_id, &request).await?;
            println!("OK: sent credential {uri} to {profile_id}");
            Ok(0)
        }
        CredentialCommand::Accept { uri } => {
            let ok = credentials
                .accept_credential(&AcceptCredentialRequest::new(uri))
                .await?;
            Ok(report(ok, &format!("accepted credential {uri}")))
        }
        CredentialCommand::List {
            mailbox,
            limit,
            with,
        } => {
            let with = with.as_deref();
            let deliveries = match mailbox {
                Mailbox::Received => credentials.received_credentials(*limit, with).await?,
                Mailbox::Sent => credentials.sent_credentials(*limit, with).await?,
                Mailbox::Incoming => credentials.incoming_credentials(*limit, with).await?,
            };
            print_json(&deliveries)?;
            Ok(0)
        }
        CredentialCommand::Issue {
            file,
            sa_endpoint,
            sa_name,
        } => {
            let credential: UnsignedCredential = read_document(file)?;
            let signing_authority = match (sa_endpoint, sa_name) {
                (Some(endpoint), Some(name)) => Some(SigningAuthorityRef {
                    endpoint: endpoint.clone(),
                    name: name.clone(),
                }),
                _ => None,
            };
            let issued = credentials
                .issue_credential(&IssueCredentialRequest {
                    credential,
                    signing_authority,
                    options: None,
                })
                .await?;
            print_json(&issued)?;
            Ok(0)
        }
        CredentialCommand::Verify { file } => {
            let credential: VerifiableCredential = read_document(file)?;
            let result = credentials.verify_credential(&credential).await?;
            print_json(&result)?;
            Ok(if result.is_valid() { 0 } else { 1 })
        }
        CredentialCommand::Delete { uri } => {
            let ok = credentials.delete_credential(uri).await?;
            Ok(report(ok, &format!("deleted credential {uri}")))
        }
    }
}
