//
//  floe-cli
//  api/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Session State and Reference Resolution
//!
//! This module provides [`Session`], the explicitly-passed context object that
//! every resource accessor borrows, and the resolver that turns human-typed
//! scope references into the numeric identifiers the API wants.
//!
//! ## Overview
//!
//! Floe operations are scoped to an organization or a workspace, but users
//! type names, not ids. A reference can be:
//!
//! - bare digits — already a numeric id, passed through untouched
//! - a bare name — a workspace (or organization) name on its own
//! - `organization/workspace` — a fully qualified workspace reference
//!
//! Resolution walks the caller's organization/workspace associations (one
//! `GET /user/{userId}/workspaces` call) and matches case-insensitively.
//! Successful lookups are memoized in a per-session cache keyed by the
//! lowercased reference, so each distinct name costs at most one upstream
//! fetch per session. The user-identity lookup behind that endpoint is itself
//! cached — at most one `GET /user-info` per session.
//!
//! The session is deliberately not a global: callers own it and pass it into
//! accessors, which keeps the one-cache-per-session semantics visible in the
//! type system. It is single-threaded; sharing one session across threads
//! would need explicit synchronization around the cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use floe_cli::api::{HttpClient, ScopeKind, ScopeRef, Session};
//!
//! let session = Session::new(HttpClient::new("https://api.floe.io", "tok")?);
//! let ws_id = session.resolve(&ScopeRef::from("acme/prod"), ScopeKind::Workspace)?;
//! println!("workspace id: {ws_id}");
//! # Ok::<(), floe_cli::api::ApiError>(())
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::client::HttpClient;
use super::error::ApiError;

/// The kind of scope a reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// An organization, resolved by organization name.
    Organization,
    /// A workspace, resolved by workspace name or `org/workspace`.
    Workspace,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Organization => write!(f, "organization"),
            ScopeKind::Workspace => write!(f, "workspace"),
        }
    }
}

/// A human-typed scope reference: either an already-resolved numeric id or a
/// name still to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeRef {
    /// An already-resolved numeric identifier.
    Id(i64),
    /// A name, bare or `organization/workspace`-qualified.
    Name(String),
}

impl From<i64> for ScopeRef {
    fn from(id: i64) -> Self {
        ScopeRef::Id(id)
    }
}

impl From<&str> for ScopeRef {
    fn from(name: &str) -> Self {
        ScopeRef::Name(name.to_string())
    }
}

impl From<String> for ScopeRef {
    fn from(name: String) -> Self {
        ScopeRef::Name(name)
    }
}

impl fmt::Display for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeRef::Id(id) => write!(f, "{id}"),
            ScopeRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// One organization/workspace association of the current user.
///
/// Rows with a `null` workspace name represent organization-only membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgAndWorkspace {
    /// Organization id.
    #[serde(rename = "orgId")]
    pub org_id: i64,
    /// Organization name.
    #[serde(rename = "orgName")]
    pub org_name: String,
    /// Workspace id, absent for organization-only rows.
    #[serde(rename = "workspaceId", default)]
    pub workspace_id: Option<i64>,
    /// Workspace name, absent for organization-only rows.
    #[serde(rename = "workspaceName", default)]
    pub workspace_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    id: i64,
}

/// Per-invocation session: the transport plus the identifier cache.
///
/// Owns the [`HttpClient`] and two pieces of memoized state: the current
/// user's numeric id (fetched at most once) and the reference cache
/// (insert-only, lowercase reference → resolved id, never evicted). A
/// reference is assumed immutable for the lifetime of the session; a session
/// lives for one CLI invocation, so a server-side rename can go stale for at
/// most that long.
pub struct Session {
    client: HttpClient,
    user_id: RefCell<Option<i64>>,
    scope_cache: RefCell<HashMap<String, i64>>,
}

impl Session {
    /// Creates a session around an HTTP client.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            user_id: RefCell::new(None),
            scope_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the transport shared by all accessors of this session.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the current user's numeric id, fetching it on first use.
    ///
    /// At most one `GET /user-info` is made per session.
    pub fn user_id(&self) -> Result<i64, ApiError> {
        if let Some(id) = *self.user_id.borrow() {
            return Ok(id);
        }

        let body = self.client.get("/user-info", &[])?;
        let user: UserInfo = serde_json::from_value(body.get("user").cloned().unwrap_or_default())
            .map_err(|e| ApiError::InvalidRequest(format!("malformed user-info response: {e}")))?;
        *self.user_id.borrow_mut() = Some(user.id);
        Ok(user.id)
    }

    /// Fetches the caller's organization/workspace associations.
    ///
    /// The endpoint is not paginated; one call returns the full list. The
    /// list itself is not cached — only resolved ids are — so each cache
    /// miss costs one fetch.
    pub fn workspace_associations(&self) -> Result<Vec<OrgAndWorkspace>, ApiError> {
        let user_id = self.user_id()?;
        let body = self
            .client
            .get(&format!("/user/{user_id}/workspaces"), &[])?;
        let rows = body
            .get("orgsAndWorkspaces")
            .and_then(serde_json::Value::as_array)
            .cloned()
            .unwrap_or_default();
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|e| {
                    ApiError::InvalidRequest(format!("malformed workspace association: {e}"))
                })
            })
            .collect()
    }

    /// Resolves a reference to a numeric organization or workspace id.
    ///
    /// - An [`ScopeRef::Id`] is returned unchanged, no cache interaction.
    /// - A name consisting only of digits is parsed and returned as an id;
    ///   numeric-looking strings are treated as already resolved, not as
    ///   names.
    /// - Anything else is lowercased, looked up in the cache, and on a miss
    ///   matched case-insensitively against the user's associations. For
    ///   [`ScopeKind::Workspace`] a reference containing `/` must match both
    ///   organization and workspace name; a bare name matches the first
    ///   workspace of that name in any organization.
    ///
    /// # Errors
    ///
    /// [`ApiError::UnknownScope`] naming the original reference when no
    /// association matches; transport failures propagate unchanged.
    pub fn resolve(&self, reference: &ScopeRef, kind: ScopeKind) -> Result<i64, ApiError> {
        let name = match reference {
            ScopeRef::Id(id) => return Ok(*id),
            ScopeRef::Name(name) => name,
        };

        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            return name.parse::<i64>().map_err(|_| {
                ApiError::InvalidRequest(format!("'{name}' is not a valid numeric id"))
            });
        }

        let key = name.to_lowercase();
        if let Some(id) = self.scope_cache.borrow().get(&key) {
            return Ok(*id);
        }

        let associations = self.workspace_associations()?;
        let resolved = match kind {
            ScopeKind::Organization => associations
                .iter()
                .find(|a| a.org_name.to_lowercase() == key)
                .map(|a| a.org_id),
            ScopeKind::Workspace => self.match_workspace(&associations, &key),
        };

        match resolved {
            Some(id) => {
                self.scope_cache.borrow_mut().insert(key, id);
                Ok(id)
            }
            None => Err(ApiError::UnknownScope {
                kind,
                reference: name.clone(),
            }),
        }
    }

    /// Matches a lowercased workspace reference against the associations.
    ///
    /// A bare name takes the first match; duplicates across organizations are
    /// reported with a warning but do not fail the lookup.
    fn match_workspace(&self, associations: &[OrgAndWorkspace], key: &str) -> Option<i64> {
        if let Some((org_part, ws_part)) = key.split_once('/') {
            return associations
                .iter()
                .find(|a| {
                    a.org_name.to_lowercase() == org_part
                        && a.workspace_name.as_deref().map(str::to_lowercase)
                            == Some(ws_part.to_string())
                })
                .and_then(|a| a.workspace_id);
        }

        let mut matches = associations.iter().filter(|a| {
            a.workspace_name.as_deref().map(str::to_lowercase) == Some(key.to_string())
        });
        let first = matches.next()?;
        if let Some(second) = matches.next() {
            warn!(
                workspace = key,
                "'{}' also exists in organization '{}'; using '{}/{}' — qualify the reference to disambiguate",
                key, second.org_name, first.org_name, key
            );
        }
        first.workspace_id
    }
}
