//
//  floe-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # SDK Layer for the Floe API
//!
//! This module is the SDK underneath the CLI: a blocking HTTP transport, a
//! typed error taxonomy, the auto-paginating result sequence, the scope
//! resolver with its per-session identifier cache, and one resource accessor
//! per endpoint family.
//!
//! ## Architecture
//!
//! - [`client`]: the transport boundary — one HTTP round-trip per call,
//!   bearer auth, base-URL composition
//! - [`error`]: [`ApiError`] and the response classifier
//! - [`pagination`]: [`PagedList`], the lazy page-fetching iterator
//! - [`session`]: [`Session`] (explicit session state) and reference
//!   resolution
//! - [`resources`]: accessors for pipelines, runs, compute environments,
//!   credentials, datasets, secrets, labels, teams, participants, data
//!   links, organizations, and workspaces
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floe_cli::api::{HttpClient, Session};
//! use floe_cli::api::resources::PipelinesApi;
//!
//! let session = Session::new(HttpClient::new("https://api.floe.io", "tok")?);
//! let pipelines = PipelinesApi::new(&session);
//! for pipeline in pipelines.list(Some(&"acme/prod".into()), None)? {
//!     println!("{}", pipeline?.name);
//! }
//! # Ok::<(), floe_cli::api::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod session;

pub use client::HttpClient;
pub use error::{classify, ApiError};
pub use pagination::{Page, PagedList, PageFetch, DEFAULT_PAGE_SIZE};
pub use session::{OrgAndWorkspace, ScopeKind, ScopeRef, Session};
