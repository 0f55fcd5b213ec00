//
//  floe-cli
//  cli/secrets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipeline secret commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Secret, SecretsApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage pipeline secrets
#[derive(Args, Debug)]
pub struct SecretsCommand {
    #[command(subcommand)]
    pub command: SecretsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SecretsSubcommand {
    /// List secrets
    #[command(visible_alias = "ls")]
    List,

    /// View secret metadata (never the value)
    View(SecretArgs),

    /// Create a secret
    Add(AddArgs),

    /// Replace a secret's value
    Update(AddArgs),

    /// Delete a secret
    #[command(visible_alias = "rm")]
    Delete(SecretArgs),
}

#[derive(Args, Debug)]
pub struct SecretArgs {
    /// Secret name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Secret name
    pub name: String,

    /// Secret value
    pub value: String,
}

impl TableOutput for Secret {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "LAST USED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.last_used.clone().unwrap_or_default(),
        ]
    }
}

impl SecretsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = SecretsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            SecretsSubcommand::List => {
                let secrets = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&secrets)?;
            }
            SecretsSubcommand::View(args) => {
                let secret = api.find_by_name(&args.name, scope.as_ref())?;
                writer.write_item(&secret)?;
            }
            SecretsSubcommand::Add(args) => {
                api.add(&args.name, &args.value, scope.as_ref())?;
                writer.write_success(&format!("Created secret '{}'", args.name));
            }
            SecretsSubcommand::Update(args) => {
                let secret = api.find_by_name(&args.name, scope.as_ref())?;
                api.update(secret.id, &args.value, scope.as_ref())?;
                writer.write_success(&format!("Updated secret '{}'", args.name));
            }
            SecretsSubcommand::Delete(args) => {
                let secret = api.find_by_name(&args.name, scope.as_ref())?;
                api.delete(secret.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted secret '{}'", args.name));
            }
        }
        Ok(())
    }
}
