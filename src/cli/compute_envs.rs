//
//  floe-cli
//  cli/compute_envs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Compute environment commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{ComputeEnv, ComputeEnvsApi};
use crate::api::ScopeRef;
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage compute environments
#[derive(Args, Debug)]
pub struct ComputeEnvsCommand {
    #[command(subcommand)]
    pub command: ComputeEnvsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ComputeEnvsSubcommand {
    /// List compute environments
    #[command(visible_alias = "ls")]
    List,

    /// View compute environment details
    View(ComputeEnvArgs),

    /// Delete a compute environment
    #[command(visible_alias = "rm")]
    Delete(ComputeEnvArgs),
}

#[derive(Args, Debug)]
pub struct ComputeEnvArgs {
    /// Compute environment id or name
    pub compute_env: String,
}

impl TableOutput for ComputeEnv {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "PLATFORM", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.platform.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
        ]
    }
}

impl ComputeEnvsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = ComputeEnvsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            ComputeEnvsSubcommand::List => {
                let envs = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&envs)?;
            }
            ComputeEnvsSubcommand::View(args) => {
                let env = lookup(&api, &args.compute_env, scope.as_ref())?;
                writer.write_item(&env)?;
            }
            ComputeEnvsSubcommand::Delete(args) => {
                let env = lookup(&api, &args.compute_env, scope.as_ref())?;
                api.delete(&env.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted compute environment '{}'", env.name));
            }
        }
        Ok(())
    }
}

/// Ids are opaque strings; try a direct get first and fall back to a
/// by-name scan when the reference does not match an id.
fn lookup(
    api: &ComputeEnvsApi<'_>,
    reference: &str,
    scope: Option<&ScopeRef>,
) -> Result<ComputeEnv> {
    match api.get(reference, scope) {
        Ok(env) => Ok(env),
        Err(crate::api::ApiError::NotFound(_)) => Ok(api.find_by_name(reference, scope)?),
        Err(e) => Err(e.into()),
    }
}
