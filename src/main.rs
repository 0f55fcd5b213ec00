//
//  floe-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use floe_cli::cli::{Cli, Commands};
use floe_cli::exit_codes;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("FLOE_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Pipelines(cmd) => cmd.run(&cli.global),
        Commands::Runs(cmd) => cmd.run(&cli.global),
        Commands::ComputeEnvs(cmd) => cmd.run(&cli.global),
        Commands::Credentials(cmd) => cmd.run(&cli.global),
        Commands::Datasets(cmd) => cmd.run(&cli.global),
        Commands::Secrets(cmd) => cmd.run(&cli.global),
        Commands::Labels(cmd) => cmd.run(&cli.global),
        Commands::Members(cmd) => cmd.run(&cli.global),
        Commands::DataLinks(cmd) => cmd.run(&cli.global),
        Commands::Orgs(cmd) => cmd.run(&cli.global),
        Commands::Workspaces(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Completion(cmd) => cmd.run(&cli.global),
    }
}
