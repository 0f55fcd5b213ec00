//
//  floe-cli
//  cli/data_links.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Data link commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::{DataLink, DataLinksApi};
use crate::output::TableOutput;

use super::{collect, GlobalOptions};

/// Browse data links
#[derive(Args, Debug)]
pub struct DataLinksCommand {
    #[command(subcommand)]
    pub command: DataLinksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DataLinksSubcommand {
    /// List data links
    #[command(visible_alias = "ls")]
    List,

    /// View data link details
    View(DataLinkArgs),
}

#[derive(Args, Debug)]
pub struct DataLinkArgs {
    /// Data link id or name
    pub data_link: String,
}

impl TableOutput for DataLink {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "PROVIDER", "RESOURCE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.provider.clone().unwrap_or_default(),
            self.resource_ref.clone().unwrap_or_default(),
        ]
    }
}

impl DataLinksCommand {
    /// Executes the subcommand.
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let api = DataLinksApi::new(&session);
        let scope = global.scope();
        let writer = global.writer();

        match &self.command {
            DataLinksSubcommand::List => {
                let links = collect(api.list(scope.as_ref())?)?;
                writer.write_list(&links)?;
            }
            DataLinksSubcommand::View(args) => {
                let link = match api.get(&args.data_link, scope.as_ref()) {
                    Ok(l) => l,
                    Err(crate::api::ApiError::NotFound(_)) => {
                        api.find_by_name(&args.data_link, scope.as_ref())?
                    }
                    Err(e) => return Err(e.into()),
                };
                writer.write_item(&link)?;
            }
        }
        Ok(())
    }
}
