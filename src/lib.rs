//
//  floe-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Floe CLI Library
//!
//! A command-line client and SDK for the Floe workflow orchestration
//! platform.
//!
//! ## Overview
//!
//! This library backs the `floe` binary and doubles as an SDK: every resource
//! of the platform (pipelines, runs, compute environments, credentials,
//! datasets, secrets, labels, teams, participants, data links, organizations,
//! workspaces) is reachable through a typed accessor over a shared
//! [`Session`](api::Session).
//!
//! The three pieces everything else leans on:
//!
//! - **Auto-paginating sequences** ([`api::PagedList`]): every list operation
//!   returns a lazy iterator that fetches `offset`/`max` pages on demand and
//!   exposes the server-reported total without materializing the listing.
//! - **Reference resolution** ([`api::Session::resolve`]): human references —
//!   `acme/prod`, a bare workspace name, or a numeric id — resolve to the
//!   numeric identifiers the API wants, memoized per session.
//! - **Typed failures** ([`api::ApiError`]): every HTTP response is
//!   classified once at the transport boundary; nothing above it looks at
//!   raw status codes.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: Transport, error taxonomy, pagination, session, accessors
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (table, JSON, YAML)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use floe_cli::api::{HttpClient, Session};
//! use floe_cli::api::resources::RunsApi;
//!
//! let session = Session::new(HttpClient::new("https://api.floe.io", "tok")?);
//! for run in RunsApi::new(&session).list(Some(&"acme/prod".into()))? {
//!     let run = run?;
//!     println!("{} {}", run.id, run.status.unwrap_or_default());
//! }
//! # Ok::<(), floe_cli::api::ApiError>(())
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// SDK layer: transport, errors, pagination, session, resource accessors.
pub mod api;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/floe/config.toml`
/// - macOS: `~/Library/Application Support/floe/config.toml`
/// - Windows: `%APPDATA%\floe\config.toml`
pub mod config;

/// Output formatting (table, JSON, YAML).
pub mod output;

/// The current version of the CLI.
///
/// Sourced from `Cargo.toml` at compile time via `CARGO_PKG_VERSION`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes so scripts can detect the outcome of CLI
/// operations.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;
}
