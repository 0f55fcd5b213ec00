//
//  floe-cli
//  cli/credentials.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Credentials commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Credential, CredentialsApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage credentials
#[derive(Args, Debug)]
pub struct CredentialsCommand {
    #[command(subcommand)]
    pub command: CredentialsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CredentialsSubcommand {
    /// List credentials
    #[command(visible_alias = "ls")]
    List,

    /// View credentials details
    View(CredentialArgs),

    /// Delete credentials
    #[command(visible_alias = "rm")]
    Delete(CredentialArgs),
}

#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Credentials id or name
    pub credentials: String,
}

impl TableOutput for Credential {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "PROVIDER"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.provider.clone().unwrap_or_default(),
        ]
    }
}

impl CredentialsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = CredentialsApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            CredentialsSubcommand::List => {
                let credentials = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&credentials)?;
            }
            CredentialsSubcommand::View(args) => {
                let credential = match api.get(&args.credentials, scope.as_ref()) {
                    Ok(c) => c,
                    Err(crate::api::ApiError::NotFound(_)) => {
                        api.find_by_name(&args.credentials, scope.as_ref())?
                    }
                    Err(e) => return Err(e.into()),
                };
                writer.write_item(&credential)?;
            }
            CredentialsSubcommand::Delete(args) => {
                let credential = match api.get(&args.credentials, scope.as_ref()) {
                    Ok(c) => c,
                    Err(crate::api::ApiError::NotFound(_)) => {
                        api.find_by_name(&args.credentials, scope.as_ref())?
                    }
                    Err(e) => return Err(e.into()),
                };
                api.delete(&credential.id, scope.as_ref())?;
                writer.write_success(&format!("Deleted credentials '{}'", credential.name));
            }
        }
        Ok(())
    }
}
