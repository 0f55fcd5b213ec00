//
//  floe-cli
//  cli/datasets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Dataset commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Dataset, DatasetsApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage datasets
#[derive(Args, Debug)]
pub struct DatasetsCommand {
    #[command(subcommand)]
    pub command: DatasetsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DatasetsSubcommand {
    /// List datasets
    #[command(visible_alias = "ls")]
    List,

    /// View dataset details
    View(DatasetArgs),

    /// Create a dataset
    Add(AddArgs),

    /// Delete a dataset
    #[command(visible_alias = "rm")]
    Delete(DatasetArgs),
}

#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Dataset name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Dataset name
    pub name: String,

    /// Free-text description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl TableOutput for Dataset {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "MEDIA TYPE", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.media_type.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl DatasetsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = DatasetsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            DatasetsSubcommand::List => {
                let datasets = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&datasets)?;
            }
            DatasetsSubcommand::View(args) => {
                let dataset = api.find_by_name(&args.name, scope.as_ref())?;
                writer.write_item(&dataset)?;
            }
            DatasetsSubcommand::Add(args) => {
                let dataset =
                    api.add(&args.name, args.description.as_deref(), scope.as_ref())?;
                writer.write_success(&format!("Created dataset '{}'", dataset.name));
                writer.write_item(&dataset)?;
            }
            DatasetsSubcommand::Delete(args) => {
                let dataset = api.find_by_name(&args.name, scope.as_ref())?;
                api.delete(&dataset.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted dataset '{}'", dataset.name));
            }
        }
        Ok(())
    }
}
