//
//  floe-cli
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Shell completion script generation

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::Shell;

use super::{Cli, GlobalOptions};

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    /// Writes the completion script for the requested shell to stdout.
    pub fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let mut command = Cli::command();
        clap_complete::generate(self.shell, &mut command, "floe", &mut std::io::stdout());
        Ok(())
    }
}
