//
//  floe-cli
//  cli/pipelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipeline commands
//!
//! Pipelines pair a workflow repository with saved launch defaults. This
//! module provides commands to list, view, and delete them within a
//! workspace.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Pipeline, PipelinesApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage pipelines
#[derive(Args, Debug)]
pub struct PipelinesCommand {
    #[command(subcommand)]
    pub command: PipelinesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PipelinesSubcommand {
    /// List pipelines
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View pipeline details
    View(ViewArgs),

    /// Delete a pipeline
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show pipelines whose name matches this filter
    #[arg(long, short = 'f')]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Pipeline name or numeric id
    pub pipeline: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Pipeline name or numeric id
    pub pipeline: String,
}

impl TableOutput for Pipeline {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "REPOSITORY", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.repository.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl PipelinesCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = PipelinesApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            PipelinesSubcommand::List(args) => {
                let pipelines = collect(api.list(scope.as_ref(), args.filter.as_deref())?)?;
                writer.write_list(&pipelines)?;
            }
            PipelinesSubcommand::View(args) => {
                let pipeline = lookup(&api, &args.pipeline, scope.as_ref())?;
                writer.write_item(&pipeline)?;
            }
            PipelinesSubcommand::Delete(args) => {
                let pipeline = lookup(&api, &args.pipeline, scope.as_ref())?;
                api.delete(pipeline.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted pipeline '{}'", pipeline.name));
            }
        }
        Ok(())
    }
}

/// Looks up a pipeline by numeric id or by name.
fn lookup(
    api: &PipelinesApi<'_>,
    reference: &str,
    scope: Option<&crate::api::ScopeRef>,
) -> Result<Pipeline> {
    let pipeline = match reference.parse::<i64>() {
        Ok(id) => api.get(id, scope)?,
        Err(_) => api.find_by_name(reference, scope)?,
    };
    Ok(pipeline)
}
