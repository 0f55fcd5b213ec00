//
//  floe-cli
//  cli/runs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workflow run commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Run, RunsApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage workflow runs
#[derive(Args, Debug)]
pub struct RunsCommand {
    #[command(subcommand)]
    pub command: RunsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RunsSubcommand {
    /// List runs
    #[command(visible_alias = "ls")]
    List,

    /// View run details
    View(RunArgs),

    /// Cancel a running workflow
    Cancel(RunArgs),

    /// Delete a run record
    #[command(visible_alias = "rm")]
    Delete(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run id
    pub id: String,
}

impl TableOutput for Run {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "RUN NAME", "STATUS", "PROJECT", "SUBMITTED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.run_name.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
            self.project_name.clone().unwrap_or_default(),
            self.submit
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        ]
    }
}

impl RunsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = RunsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            RunsSubcommand::List => {
                let runs = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&runs)?;
            }
            RunsSubcommand::View(args) => {
                let run = api.get(&args.id, scope.as_ref())?;
                writer.write_item(&run)?;
            }
            RunsSubcommand::Cancel(args) => {
                api.cancel(&args.id, scope.as_ref())?;
                writer.write_success(&format!("Cancellation requested for run '{}'", args.id));
            }
            RunsSubcommand::Delete(args) => {
                api.delete(&args.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted run '{}'", args.id));
            }
        }
        Ok(())
    }
}
