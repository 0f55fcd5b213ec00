//
//  floe-cli
//  api/resources/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace accessor.
//!
//! Workspaces are listed through the user's organization/workspace
//! associations — the same endpoint the reference resolver scans. The
//! endpoint is not paginated; the listing is materialized in one call.

use super::super::error::ApiError;
use super::super::session::{OrgAndWorkspace, ScopeKind, ScopeRef, Session};

/// Accessor for workspace listing and resolution.
pub struct WorkspacesApi<'a> {
    session: &'a Session,
}

impl<'a> WorkspacesApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the user's workspaces, optionally restricted to one
    /// organization (matched case-insensitively by name).
    pub fn list(&self, org: Option<&str>) -> Result<Vec<OrgAndWorkspace>, ApiError> {
        let associations = self.session.workspace_associations()?;
        Ok(associations
            .into_iter()
            .filter(|a| a.workspace_id.is_some())
            .filter(|a| match org {
                Some(org) => a.org_name.to_lowercase() == org.to_lowercase(),
                None => true,
            })
            .collect())
    }

    /// Fetches one workspace association by reference.
    pub fn get(&self, workspace: &ScopeRef) -> Result<OrgAndWorkspace, ApiError> {
        let ws_id = self.session.resolve(workspace, ScopeKind::Workspace)?;
        self.session
            .workspace_associations()?
            .into_iter()
            .find(|a| a.workspace_id == Some(ws_id))
            .ok_or_else(|| ApiError::UnknownScope {
                kind: ScopeKind::Workspace,
                reference: workspace.to_string(),
            })
    }
}
