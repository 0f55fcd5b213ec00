//
//  floe-cli
//  api/resources/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Team accessor.
//!
//! Teams live under an organization, so every operation resolves an
//! organization reference rather than a workspace one.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeKind, ScopeRef, Session};
use super::paged;

/// A team within an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team id.
    #[serde(rename = "teamId")]
    pub id: i64,

    /// Team name.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of members.
    #[serde(rename = "membersCount", default)]
    pub members_count: u64,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/orgs/{orgId}/teams` endpoint family.
pub struct TeamsApi<'a> {
    session: &'a Session,
}

impl<'a> TeamsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists teams of an organization.
    pub fn list(&self, org: &ScopeRef) -> Result<PagedList<'a, Team>, ApiError> {
        let org_id = self.session.resolve(org, ScopeKind::Organization)?;
        paged(
            self.session,
            format!("/orgs/{org_id}/teams"),
            "teams",
            Vec::new(),
        )
    }

    /// Creates a team.
    pub fn add(
        &self,
        org: &ScopeRef,
        name: &str,
        description: Option<&str>,
    ) -> Result<Team, ApiError> {
        let org_id = self.session.resolve(org, ScopeKind::Organization)?;
        let body = json!({ "name": name, "description": description });
        let response = self
            .session
            .client()
            .post(&format!("/orgs/{org_id}/teams"), &[], Some(&body))?;
        super::unwrap_entity(&response, "team")
    }

    /// Deletes a team by id.
    pub fn delete(&self, org: &ScopeRef, team_id: i64) -> Result<(), ApiError> {
        let org_id = self.session.resolve(org, ScopeKind::Organization)?;
        self.session
            .client()
            .delete(&format!("/orgs/{org_id}/teams/{team_id}"), &[])?;
        Ok(())
    }
}
