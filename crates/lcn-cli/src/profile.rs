//! # Profile Subcommand
//!
//! Own profile, profile search, connections, blocking, invites and
//! signing authorities.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use lcn_client::profiles::{CreateProfileRequest, GenerateInviteRequest, SearchProfilesOptions};
use lcn_client::{LcnClient, PaginationOptions, ProfileId};

use crate::{print_json, print_optional, read_document, report, ConnectionArgs};

/// Arguments for the `lcn profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the caller's profile, or another profile by id.
    Show {
        #[arg(value_name = "PROFILE_ID")]
        profile_id: Option<ProfileId>,
    },

    /// Create the caller's profile from a JSON or YAML document.
    Create {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Create a service profile instead of a personal one.
        #[arg(long)]
        service: bool,
    },

    /// Search profiles by id prefix.
    Search {
        input: String,
        #[arg(long)]
        limit: Option<u32>,
        /// Include each hit's connection status with the caller.
        #[arg(long)]
        with_status: bool,
    },

    /// Send a connection request.
    Connect { profile_id: ProfileId },

    /// Accept a pending connection request.
    Accept { profile_id: ProfileId },

    /// Remove a connection.
    Disconnect { profile_id: ProfileId },

    /// List connections, one page at a time.
    Connections {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },

    /// List unanswered connection requests sent to the caller.
    Requests {
        /// Show requests the caller sent instead.
        #[arg(long)]
        sent: bool,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Block a profile.
    Block { profile_id: ProfileId },

    /// Unblock a profile.
    Unblock { profile_id: ProfileId },

    /// List blocked profiles.
    Blocked,

    /// Generate a connection invite.
    Invite {
        /// Seconds until the invite expires; 0 for never.
        #[arg(long)]
        expiration: Option<u64>,
        #[arg(long)]
        max_uses: Option<u32>,
    },

    /// List invites that can still be used.
    Invites,

    /// Invalidate an invite by its challenge.
    InvalidateInvite { challenge: String },

    /// List the caller's signing authorities.
    SigningAuthorities,
}

/// Execute the profile subcommand.
pub async fn run_profile(args: &ProfileArgs, connection: &ConnectionArgs) -> Result<u8> {
    let client = connection.client()?;
    match &args.command {
        ProfileCommand::Show { profile_id } => cmd_show(&client, profile_id.as_ref()).await,
        ProfileCommand::Create { file, service } => {
            let request: CreateProfileRequest = read_document(file)?;
            let did = if *service {
                client.profiles().create_service_profile(&request).await?
            } else {
                client.profiles().create_profile(&request).await?
            };
            println!("OK: created profile {} did={did}", request.profile_id);
            Ok(0)
        }
        ProfileCommand::Search {
            input,
            limit,
            with_status,
        } => {
            let options = SearchProfilesOptions {
                limit: *limit,
                include_connection_status: with_status.then_some(true),
                ..Default::default()
            };
            let hits = client.profiles().search_profiles(input, &options).await?;
            print_json(&hits)?;
            Ok(0)
        }
        ProfileCommand::Connect { profile_id } => {
            let ok = client.profiles().connect_with(profile_id).await?;
            Ok(report(ok, &format!("connection request sent to {profile_id}")))
        }
        ProfileCommand::Accept { profile_id } => {
            let ok = client.profiles().accept_connection_request(profile_id).await?;
            Ok(report(ok, &format!("connected with {profile_id}")))
        }
        ProfileCommand::Disconnect { profile_id } => {
            let ok = client.profiles().disconnect_with(profile_id).await?;
            Ok(report(ok, &format!("disconnected from {profile_id}")))
        }
        ProfileCommand::Connections { limit, cursor } => {
            let options = PaginationOptions {
                limit: *limit,
                cursor: cursor.clone(),
            };
            let page = client.profiles().connections(&options).await?;
            print_json(&page)?;
            Ok(0)
        }
        ProfileCommand::Requests {
            sent,
            limit,
            cursor,
        } => {
            let options = PaginationOptions {
                limit: *limit,
                cursor: cursor.clone(),
            };
            let page = if *sent {
                client.profiles().pending_connections(&options).await?
            } else {
                client.profiles().connection_requests(&options).await?
            };
            print_json(&page)?;
            Ok(0)
        }
        ProfileCommand::Block { profile_id } => {
            let ok = client.profiles().block_profile(profile_id).await?;
            Ok(report(ok, &format!("blocked {profile_id}")))
        }
        ProfileCommand::Unblock { profile_id } => {
            let ok = client.profiles().unblock_profile(profile_id).await?;
            Ok(report(ok, &format!("unblocked {profile_id}")))
        }
        ProfileCommand::Blocked => {
            print_json(&client.profiles().blocked_profiles().await?)?;
            Ok(0)
        }
        ProfileCommand::Invites => {
            print_json(&client.profiles().invites().await?)?;
            Ok(0)
        }
        ProfileCommand::InvalidateInvite { challenge } => {
            let ok = client.profiles().invalidate_invite(challenge).await?;
            Ok(report(ok, &format!("invalidated invite {challenge}")))
        }
        ProfileCommand::Invite {
            expiration,
            max_uses,
        } => {
            let request = GenerateInviteRequest {
                expiration: *expiration,
                challenge: None,
                max_uses: *max_uses,
            };
            let invite = client.profiles().generate_invite(&request).await?;
            print_json(&invite)?;
            Ok(0)
        }
        ProfileCommand::SigningAuthorities => {
            let authorities = client.profiles().signing_authorities().await?;
            print_json(&authorities)?;
            Ok(0)
        }
    }
}

async fn cmd_show(client: &LcnClient, profile_id: Option<&ProfileId>) -> Result<u8> {
    match profile_id {
        Some(id) => {
            let profile = client.profiles().get_other_profile(id).await?;
            print_optional(profile.as_ref(), &format!("profile {id}"))
        }
        None => {
            let profile = client.profiles().get_profile().await?;
            print_optional(profile.as_ref(), "no profile for this token")
        }
    }
}
