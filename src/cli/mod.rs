//
//  floe-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod compute_envs;
mod config;
mod credentials;
mod data_links;
mod datasets;
mod labels;
mod members;
mod orgs;
mod pipelines;
mod runs;
mod secrets;
mod workspaces;

pub use completion::CompletionCommand;
pub use compute_envs::ComputeEnvsCommand;
pub use config::ConfigCommand;
pub use credentials::CredentialsCommand;
pub use data_links::DataLinksCommand;
pub use datasets::DatasetsCommand;
pub use labels::LabelsCommand;
pub use members::MembersCommand;
pub use orgs::OrgsCommand;
pub use pipelines::PipelinesCommand;
pub use runs::RunsCommand;
pub use secrets::SecretsCommand;
pub use workspaces::WorkspacesCommand;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::api::{HttpClient, PagedList, ScopeRef, Session};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Floe CLI - Work with the Floe platform from the command line
#[derive(Parser, Debug)]
#[command(
    name = "floe",
    version,
    about = "Work with the Floe workflow orchestration platform from the command line",
    long_about = "floe is a CLI for the Floe platform.\n\n\
                  It brings pipelines, runs, compute environments, and workspace\n\
                  administration to your terminal.",
    propagate_version = true,
    after_help = "Use 'floe <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Workspace as ORGANIZATION/WORKSPACE, a bare workspace name, or a numeric id
    #[arg(long, short = 'w', global = true, env = "FLOE_WORKSPACE")]
    pub workspace: Option<String>,

    /// Floe API endpoint
    #[arg(long, global = true, env = "FLOE_API_URL")]
    pub url: Option<String>,

    /// Personal access token
    #[arg(long, global = true, env = "FLOE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl GlobalOptions {
    /// Builds an API session from flags, environment, and the config file.
    pub fn session(&self) -> Result<Session> {
        let config = Config::load()?;
        let url = self.url.clone().unwrap_or_else(|| config.api_url());
        let Some(token) = self.access_token.clone().or_else(|| config.access_token()) else {
            bail!(
                "No access token configured. Set FLOE_ACCESS_TOKEN or run \
                 'floe config set access_token <token>'."
            );
        };
        Ok(Session::new(HttpClient::new(&url, &token)?))
    }

    /// Returns the workspace scope selected with `-w`, if any.
    pub fn scope(&self) -> Option<ScopeRef> {
        self.workspace.clone().map(ScopeRef::from)
    }

    /// Returns an output writer for the selected format.
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.output)
    }
}

/// Drains an auto-paginating sequence into a vector, surfacing the first
/// fetch error.
pub(crate) fn collect<T>(list: PagedList<'_, T>) -> Result<Vec<T>> {
    let mut items = Vec::new();
    for item in list {
        items.push(item?);
    }
    Ok(items)
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage pipelines
    #[command(visible_alias = "pl")]
    Pipelines(PipelinesCommand),

    /// Manage workflow runs
    Runs(RunsCommand),

    /// Manage compute environments
    #[command(visible_alias = "ce")]
    ComputeEnvs(ComputeEnvsCommand),

    /// Manage credentials
    Credentials(CredentialsCommand),

    /// Manage datasets
    Datasets(DatasetsCommand),

    /// Manage pipeline secrets
    Secrets(SecretsCommand),

    /// Manage labels
    Labels(LabelsCommand),

    /// Manage teams and workspace participants
    Members(MembersCommand),

    /// Browse data links
    DataLinks(DataLinksCommand),

    /// Manage organizations
    Orgs(OrgsCommand),

    /// Manage workspaces
    #[command(visible_alias = "ws")]
    Workspaces(WorkspacesCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),
}
