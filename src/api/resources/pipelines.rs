//
//  floe-cli
//  api/resources/pipelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Pipelines Accessor
//!
//! Launchable pipeline definitions of a workspace. Pipelines pair a workflow
//! repository with saved launch defaults; this accessor covers listing (with
//! an optional name filter), point reads by id or name, and deletion.
//!
//! # Example
//!
//! ```rust,no_run
//! use floe_cli::api::{HttpClient, Session};
//! use floe_cli::api::resources::PipelinesApi;
//!
//! let session = Session::new(HttpClient::new("https://api.floe.io", "tok")?);
//! let api = PipelinesApi::new(&session);
//!
//! let pipeline = api.find_by_name("rnaseq", Some(&"acme/prod".into()))?;
//! println!("{} ({})", pipeline.name, pipeline.id);
//! # Ok::<(), floe_cli::api::ApiError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A pipeline definition.
///
/// Known fields are typed; everything else the API returns is preserved in
/// `extra` so newer server versions round-trip cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Numeric pipeline id.
    #[serde(rename = "pipelineId")]
    pub id: i64,

    /// Pipeline name, unique within its workspace.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source repository URL of the workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/pipelines` endpoint family.
pub struct PipelinesApi<'a> {
    session: &'a Session,
}

impl<'a> PipelinesApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists pipelines in the given scope, optionally filtered by a search
    /// term the server applies to the pipeline name.
    pub fn list(
        &self,
        scope: Option<&ScopeRef>,
        filter: Option<&str>,
    ) -> Result<PagedList<'a, Pipeline>, ApiError> {
        let mut query = workspace_query(self.session, scope)?;
        if let Some(filter) = filter {
            query.push(("search".to_string(), filter.to_string()));
        }
        paged(self.session, "/pipelines".to_string(), "pipelines", query)
    }

    /// Fetches one pipeline by id.
    pub fn get(&self, id: i64, scope: Option<&ScopeRef>) -> Result<Pipeline, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self.session.client().get(&format!("/pipelines/{id}"), &query)?;
        unwrap_entity(&body, "pipeline")
    }

    /// Finds a pipeline by exact name, scanning the full listing.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFoundInWorkspace`] when no pipeline of that name
    /// exists in the scope.
    pub fn find_by_name(&self, name: &str, scope: Option<&ScopeRef>) -> Result<Pipeline, ApiError> {
        find_by_name(self.list(scope, None)?, "pipeline", name, scope, |p| {
            p.name.as_str()
        })
    }

    /// Deletes a pipeline by id.
    pub fn delete(&self, id: i64, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/pipelines/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    fn session_for(server: &mockito::Server) -> Session {
        Session::new(HttpClient::new(&server.url(), "tok").unwrap())
    }

    #[test]
    fn test_list_paginates_with_workspace_id() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/pipelines")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("workspaceId".into(), "9".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
                mockito::Matcher::UrlEncoded("max".into(), "50".into()),
            ]))
            .with_body(
                r#"{"pipelines": [
                    {"pipelineId": 1, "name": "rnaseq"},
                    {"pipelineId": 2, "name": "sarek"}
                ], "totalSize": 2}"#,
            )
            .expect(1)
            .create();

        let session = session_for(&server);
        let api = PipelinesApi::new(&session);
        let names: Vec<String> = api
            .list(Some(&ScopeRef::Id(9)), None)
            .unwrap()
            .map(|p| p.unwrap().name)
            .collect();
        assert_eq!(names, vec!["rnaseq", "sarek"]);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/pipelines/5")
            .with_body(r#"{"pipeline": {"pipelineId": 5, "name": "x", "futureField": true}}"#)
            .create();

        let session = session_for(&server);
        let pipeline = PipelinesApi::new(&session).get(5, None).unwrap();
        assert_eq!(pipeline.extra["futureField"], true);
    }

    #[test]
    fn test_find_by_name_miss_is_an_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/pipelines")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"pipelines": [{"pipelineId": 1, "name": "other"}], "totalSize": 1}"#)
            .create();

        let session = session_for(&server);
        let err = PipelinesApi::new(&session)
            .find_by_name("rnaseq", None)
            .unwrap_err();
        match err {
            ApiError::NotFoundInWorkspace { kind, name, workspace } => {
                assert_eq!(kind, "pipeline");
                assert_eq!(name, "rnaseq");
                assert_eq!(workspace, "user workspace");
            }
            other => panic!("expected NotFoundInWorkspace, got {other:?}"),
        }
    }
}
