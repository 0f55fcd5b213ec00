//
//  floe-cli
//  cli/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::WorkspacesApi;
use crate::api::{OrgAndWorkspace, ScopeRef};
use crate::output::TableOutput;

use super::GlobalOptions;

/// Manage workspaces
#[derive(Args, Debug)]
pub struct WorkspacesCommand {
    #[command(subcommand)]
    pub command: WorkspacesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkspacesSubcommand {
    /// List your workspaces
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View workspace details
    View(WorkspaceArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict the listing to one organization
    #[arg(long, short = 'g')]
    pub organization: Option<String>,
}

#[derive(Args, Debug)]
pub struct WorkspaceArgs {
    /// Workspace as ORGANIZATION/WORKSPACE, a bare name, or a numeric id
    pub workspace: String,
}

impl TableOutput for OrgAndWorkspace {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "WORKSPACE", "ORGANIZATION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.workspace_id.map(|id| id.to_string()).unwrap_or_default(),
            self.workspace_name.clone().unwrap_or_default(),
            self.org_name.clone(),
        ]
    }
}

impl WorkspacesCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = WorkspacesApi::new(&session);
        let writer = global.writer();

        match &self.command {
            WorkspacesSubcommand::List(args) => {
                let workspaces = api.list(args.organization.as_deref())?;
                writer.write_list(&workspaces)?;
            }
            WorkspacesSubcommand::View(args) => {
                let workspace = api.get(&ScopeRef::from(args.workspace.clone()))?;
                writer.write_item(&workspace)?;
            }
        }
        Ok(())
    }
}
