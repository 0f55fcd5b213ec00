//
//  floe-cli
//  cli/labels.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Label commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::resources::{Label, LabelsApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage labels
#[derive(Args, Debug)]
pub struct LabelsCommand {
    #[command(subcommand)]
    pub command: LabelsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LabelsSubcommand {
    /// List labels
    #[command(visible_alias = "ls")]
    List,

    /// Create a label (NAME or NAME=VALUE for a resource label)
    Add(LabelArgs),

    /// Rename a label by id
    Update(UpdateArgs),

    /// Delete a label by id
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Label as NAME or NAME=VALUE
    pub label: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Numeric label id
    pub id: i64,

    /// New label as NAME or NAME=VALUE
    pub label: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Numeric label id
    pub id: i64,
}

impl TableOutput for Label {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "VALUE", "RESOURCE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.value.clone().unwrap_or_default(),
            self.resource.to_string(),
        ]
    }
}

/// Splits a `NAME=VALUE` argument; a bare `NAME` has no value.
fn split_label(label: &str) -> Result<(&str, Option<&str>)> {
    match label.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => Ok((name, Some(value))),
        Some(_) => bail!("Invalid label '{label}': expected NAME or NAME=VALUE"),
        None => Ok((label, None)),
    }
}

impl LabelsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = LabelsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            LabelsSubcommand::List => {
                let labels = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&labels)?;
            }
            LabelsSubcommand::Add(args) => {
                let (name, value) = split_label(&args.label)?;
                let label = api.add(name, value, scope.as_ref())?;
                writer.write_success(&format!("Created label '{}'", label.name));
            }
            LabelsSubcommand::Update(args) => {
                let (name, value) = split_label(&args.label)?;
                api.update(args.id, name, value, scope.as_ref())?;
                writer.write_success(&format!("Updated label {}", args.id));
            }
            LabelsSubcommand::Delete(args) => {
                api.delete(args.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted label {}", args.id));
            }
        }
        Ok(())
    }
}
