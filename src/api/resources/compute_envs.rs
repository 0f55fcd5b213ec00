//
//  floe-cli
//  api/resources/compute_envs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Compute environment accessor.
//!
//! Creation payloads are platform-specific and built elsewhere; this accessor
//! covers listing, point reads (by id or name) and deletion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A compute environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeEnv {
    /// Opaque compute environment id.
    pub id: String,

    /// Name, unique within its workspace.
    pub name: String,

    /// Target platform, e.g. `aws-batch`, `k8s-platform`, `slurm-platform`.
    #[serde(default)]
    pub platform: Option<String>,

    /// Lifecycle status, e.g. `CREATING`, `AVAILABLE`, `ERRORED`.
    #[serde(default)]
    pub status: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/compute-envs` endpoint family.
pub struct ComputeEnvsApi<'a> {
    session: &'a Session,
}

impl<'a> ComputeEnvsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists compute environments in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, ComputeEnv>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/compute-envs".to_string(), "computeEnvs", query)
    }

    /// Fetches one compute environment by id.
    pub fn get(&self, id: &str, scope: Option<&ScopeRef>) -> Result<ComputeEnv, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self
            .session
            .client()
            .get(&format!("/compute-envs/{id}"), &query)?;
        unwrap_entity(&body, "computeEnv")
    }

    /// Finds a compute environment by exact name.
    pub fn find_by_name(
        &self,
        name: &str,
        scope: Option<&ScopeRef>,
    ) -> Result<ComputeEnv, ApiError> {
        find_by_name(self.list(scope)?, "compute environment", name, scope, |c| {
            c.name.as_str()
        })
    }

    /// Deletes a compute environment by id.
    pub fn delete(&self, id: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/compute-envs/{id}"), &query)?;
        Ok(())
    }
}
