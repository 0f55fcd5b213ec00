//
//  floe-cli
//  cli/orgs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Organization commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{Organization, OrgsApi};
use crate::api::ScopeRef;
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Manage organizations
#[derive(Args, Debug)]
pub struct OrgsCommand {
    #[command(subcommand)]
    pub command: OrgsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrgsSubcommand {
    /// List your organizations
    #[command(visible_alias = "ls")]
    List,

    /// View organization details
    View(OrgArgs),
}

#[derive(Args, Debug)]
pub struct OrgArgs {
    /// Organization name or id
    pub organization: String,
}

impl TableOutput for Organization {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "FULL NAME"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.full_name.clone().unwrap_or_default(),
        ]
    }
}

impl OrgsCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = OrgsApi::new(&session);
        let writer = global.writer();

        match &self.command {
            OrgsSubcommand::List => {
                let orgs = collect(api.list()?)?;
                writer.write_list(&orgs)?;
            }
            OrgsSubcommand::View(args) => {
                let org = api.get(&ScopeRef::from(args.organization.clone()))?;
                writer.write_item(&org)?;
            }
        }
        Ok(())
    }
}
