//
//  floe-cli
//  cli/members.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Team and workspace participant commands
//!
//! Teams belong to an organization; participants belong to a workspace, so
//! the participant subcommands require a `-w` workspace (qualified
//! `organization/workspace`, a bare name, or a numeric id).

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::resources::{Participant, ParticipantsApi, Team, TeamsApi};
use crate::api::ScopeRef;
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage teams and workspace participants
#[derive(Args, Debug)]
pub struct MembersCommand {
    #[command(subcommand)]
    pub command: MembersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MembersSubcommand {
    /// List teams of an organization
    Teams(TeamsArgs),

    /// Create a team
    TeamAdd(TeamAddArgs),

    /// Delete a team
    TeamDelete(TeamDeleteArgs),

    /// List participants of a workspace
    #[command(visible_alias = "ls")]
    List,

    /// Add a member to a workspace by user name or email
    Add(AddArgs),

    /// Change a participant's workspace role
    Role(RoleArgs),

    /// Remove a participant from a workspace
    #[command(visible_alias = "rm")]
    Delete(ParticipantArgs),
}

#[derive(Args, Debug)]
pub struct TeamsArgs {
    /// Organization name or id
    #[arg(long, short = 'g')]
    pub organization: String,
}

#[derive(Args, Debug)]
pub struct TeamAddArgs {
    /// Organization name or id
    #[arg(long, short = 'g')]
    pub organization: String,

    /// Team name
    pub name: String,

    /// Free-text description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct TeamDeleteArgs {
    /// Organization name or id
    #[arg(long, short = 'g')]
    pub organization: String,

    /// Numeric team id
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// User name or email
    pub user: String,
}

#[derive(Args, Debug)]
pub struct RoleArgs {
    /// Numeric participant id
    pub id: i64,

    /// New role
    #[arg(value_parser = ["owner", "admin", "maintain", "launch", "view"])]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct ParticipantArgs {
    /// Numeric participant id
    pub id: i64,
}

impl TableOutput for Team {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "MEMBERS", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.members_count.to_string(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl TableOutput for Participant {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TYPE", "USER", "EMAIL", "ROLE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.clone().unwrap_or_default(),
            self.user_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
        ]
    }
}

impl MembersCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let writer = global.writer();

        match &self.command {
            MembersSubcommand::Teams(args) => {
                let api = TeamsApi::new(&session);
                let teams = collect(api.list(&ScopeRef::from(args.organization.clone()))?)?;
                writer.write_list(&teams)?;
            }
            MembersSubcommand::TeamAdd(args) => {
                let api = TeamsApi::new(&session);
                let team = api.add(
                    &ScopeRef::from(args.organization.clone()),
                    &args.name,
                    args.description.as_deref(),
                )?;
                writer.write_success(&format!("Created team '{}'", team.name));
            }
            MembersSubcommand::TeamDelete(args) => {
                let api = TeamsApi::new(&session);
                api.delete(&ScopeRef::from(args.organization.clone()), args.id)?;
                writer.write_success(&format!("Deleted team {}", args.id));
            }
            MembersSubcommand::List => {
                let api = ParticipantsApi::new(&session);
                let participants = collect(api.list(&workspace_scope(global)?)?)?;
                writer.write_list(&participants)?;
            }
            MembersSubcommand::Add(args) => {
                let api = ParticipantsApi::new(&session);
                let participant = api.add(&workspace_scope(global)?, &args.user)?;
                writer.write_success(&format!(
                    "Added '{}' to the workspace",
                    participant.user_name.as_deref().unwrap_or(&args.user)
                ));
            }
            MembersSubcommand::Role(args) => {
                let api = ParticipantsApi::new(&session);
                api.update_role(&workspace_scope(global)?, args.id, &args.role)?;
                writer.write_success(&format!(
                    "Changed role of participant {} to '{}'",
                    args.id, args.role
                ));
            }
            MembersSubcommand::Delete(args) => {
                let api = ParticipantsApi::new(&session);
                api.delete(&workspace_scope(global)?, args.id)?;
                writer.write_success(&format!("Removed participant {}", args.id));
            }
        }
        Ok(())
    }
}

/// Participant operations cannot fall back to the personal workspace.
fn workspace_scope(global: &GlobalOptions) -> Result<ScopeRef> {
    match global.scope() {
        Some(scope) => Ok(scope),
        None => bail!("This command requires a workspace; pass one with -w"),
    }
}
