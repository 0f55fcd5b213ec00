//
//  floe-cli
//  api/resources/runs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workflow run accessor.
//!
//! Runs are identified by opaque string ids assigned at launch. The list
//! endpoint is `/workflow` with the usual `offset`/`max` pagination; `cancel`
//! is a POST to the run's `cancel` action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{paged, unwrap_entity, workspace_query};

/// A workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// Opaque run id.
    pub id: String,

    /// Human-readable run name assigned at launch.
    #[serde(rename = "runName", default)]
    pub run_name: Option<String>,

    /// Current status, e.g. `SUBMITTED`, `RUNNING`, `SUCCEEDED`, `FAILED`.
    #[serde(default)]
    pub status: Option<String>,

    /// Project the workflow belongs to.
    #[serde(rename = "projectName", default)]
    pub project_name: Option<String>,

    /// Submission timestamp.
    #[serde(default)]
    pub submit: Option<DateTime<Utc>>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/workflow` endpoint family.
pub struct RunsApi<'a> {
    session: &'a Session,
}

impl<'a> RunsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists runs in the given scope, newest first (server order).
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, Run>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/workflow".to_string(), "workflows", query)
    }

    /// Fetches one run by id.
    pub fn get(&self, id: &str, scope: Option<&ScopeRef>) -> Result<Run, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self.session.client().get(&format!("/workflow/{id}"), &query)?;
        unwrap_entity(&body, "workflow")
    }

    /// Requests cancellation of a running workflow.
    pub fn cancel(&self, id: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .post(&format!("/workflow/{id}/cancel"), &query, None)?;
        Ok(())
    }

    /// Deletes a run record.
    pub fn delete(&self, id: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/workflow/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_list_crosses_page_boundary() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/workflow")
            .match_query(mockito::Matcher::UrlEncoded("offset".into(), "0".into()))
            .with_body(
                r#"{"workflows": [{"id": "aa"}, {"id": "bb"}], "totalSize": 3}"#,
            )
            .expect(1)
            .create();
        server
            .mock("GET", "/workflow")
            .match_query(mockito::Matcher::UrlEncoded("offset".into(), "2".into()))
            .with_body(r#"{"workflows": [{"id": "cc"}], "totalSize": 3}"#)
            .expect(1)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let ids: Vec<String> = RunsApi::new(&session)
            .list(None)
            .unwrap()
            .map(|r| r.unwrap().id)
            .collect();
        assert_eq!(ids, vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_cancel_posts_to_action() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/workflow/aa/cancel")
            .with_status(204)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        RunsApi::new(&session).cancel("aa", None).unwrap();
        mock.assert();
    }
}
