//
//  floe-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Accessors
//!
//! One accessor per Floe endpoint family. Every accessor follows the same
//! pattern: borrow a [`Session`](super::Session), resolve the scope reference
//! once per call, inject the resolved `workspaceId` into the query (only for
//! non-personal scopes), and hand a page-fetch closure to
//! [`PagedList`](super::PagedList) for `list` operations. Point operations
//! (`get`, `add`, `update`, `delete`) go straight through the transport and
//! the classifier.
//!
//! Entity types are open records: a handful of known fields plus a
//! `#[serde(flatten)]` bag for everything else, so forward-compatible API
//! additions are preserved rather than rejected.
//!
//! By-name lookups scan one full `list(...)` sequence linearly and fail with
//! a not-found error naming the entity and the workspace context — never an
//! empty success.

mod compute_envs;
mod credentials;
mod data_links;
mod datasets;
mod labels;
mod orgs;
mod participants;
mod pipelines;
mod runs;
mod secrets;
mod teams;
mod workspaces;

pub use compute_envs::{ComputeEnv, ComputeEnvsApi};
pub use credentials::{Credential, CredentialsApi};
pub use data_links::{DataLink, DataLinksApi};
pub use datasets::{Dataset, DatasetsApi};
pub use labels::{Label, LabelsApi};
pub use orgs::{Organization, OrgsApi};
pub use participants::{Participant, ParticipantsApi};
pub use pipelines::{Pipeline, PipelinesApi};
pub use runs::{Run, RunsApi};
pub use secrets::{Secret, SecretsApi};
pub use teams::{Team, TeamsApi};
pub use workspaces::WorkspacesApi;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::pagination::{Page, PagedList, DEFAULT_PAGE_SIZE};
use super::session::{ScopeKind, ScopeRef, Session};

/// Builds the base query for a workspace-scoped operation.
///
/// Resolves the scope once and injects `workspaceId`; `None` means the
/// caller's personal workspace, which the API addresses with no parameter
/// at all.
pub(crate) fn workspace_query(
    session: &Session,
    scope: Option<&ScopeRef>,
) -> Result<Vec<(String, String)>, ApiError> {
    match scope {
        Some(reference) => {
            let id = session.resolve(reference, ScopeKind::Workspace)?;
            Ok(vec![("workspaceId".to_string(), id.to_string())])
        }
        None => Ok(Vec::new()),
    }
}

/// Builds an auto-paginating list over a workspace-scoped endpoint.
///
/// The scope is resolved here, once, before the closure is created; each
/// page fetch then only appends `offset` and `max` to the prepared query.
pub(crate) fn paged<'a, T: DeserializeOwned + 'a>(
    session: &'a Session,
    path: String,
    list_field: &'static str,
    base_query: Vec<(String, String)>,
) -> Result<PagedList<'a, T>, ApiError> {
    PagedList::new(
        Box::new(move |offset, max| {
            let mut query = base_query.clone();
            query.push(("offset".to_string(), offset.to_string()));
            query.push(("max".to_string(), max.to_string()));
            let body = session.client().get(&path, &query)?;
            Page::from_body(&body, list_field)
        }),
        DEFAULT_PAGE_SIZE,
    )
}

/// Deserializes a wrapped entity out of a response body.
///
/// Point endpoints wrap their payload in a singular field, e.g.
/// `{"pipeline": {...}}`. When `field` is absent the body itself is used,
/// which covers endpoints that return the entity unwrapped.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(
    body: &serde_json::Value,
    field: &str,
) -> Result<T, ApiError> {
    let value = body.get(field).unwrap_or(body).clone();
    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidRequest(format!("malformed '{field}' response: {e}")))
}

/// Scans a listing for an exact name match.
///
/// # Errors
///
/// [`ApiError::NotFoundInWorkspace`] when no entity's name matches; fetch
/// failures from the underlying sequence propagate unchanged.
pub(crate) fn find_by_name<'a, T>(
    list: PagedList<'a, T>,
    kind: &'static str,
    name: &str,
    scope: Option<&ScopeRef>,
    entity_name: impl Fn(&T) -> &str,
) -> Result<T, ApiError> {
    for item in list {
        let item = item?;
        if entity_name(&item) == name {
            return Ok(item);
        }
    }
    Err(ApiError::NotFoundInWorkspace {
        kind,
        name: name.to_string(),
        workspace: scope_context(scope),
    })
}

/// Human-readable workspace context for error messages.
pub(crate) fn scope_context(scope: Option<&ScopeRef>) -> String {
    match scope {
        Some(reference) => format!("workspace '{reference}'"),
        None => "user workspace".to_string(),
    }
}
