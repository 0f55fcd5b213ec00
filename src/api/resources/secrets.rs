//
//  floe-cli
//  api/resources/secrets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipeline secret accessor.
//!
//! Secret values are write-only: they are sent on `add`/`update` and never
//! echoed back by the API.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A pipeline secret (metadata only, never the value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    /// Numeric secret id.
    pub id: i64,

    /// Name, unique within its workspace.
    pub name: String,

    /// Last time the secret was used by a run.
    #[serde(rename = "lastUsed", default)]
    pub last_used: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/pipeline-secrets` endpoint family.
pub struct SecretsApi<'a> {
    session: &'a Session,
}

impl<'a> SecretsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists secrets in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, Secret>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(
            self.session,
            "/pipeline-secrets".to_string(),
            "pipelineSecrets",
            query,
        )
    }

    /// Fetches one secret by id.
    pub fn get(&self, id: i64, scope: Option<&ScopeRef>) -> Result<Secret, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self
            .session
            .client()
            .get(&format!("/pipeline-secrets/{id}"), &query)?;
        unwrap_entity(&body, "pipelineSecret")
    }

    /// Finds a secret by exact name.
    pub fn find_by_name(&self, name: &str, scope: Option<&ScopeRef>) -> Result<Secret, ApiError> {
        find_by_name(self.list(scope)?, "secret", name, scope, |s| s.name.as_str())
    }

    /// Creates a secret.
    pub fn add(
        &self,
        name: &str,
        value: &str,
        scope: Option<&ScopeRef>,
    ) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = json!({ "name": name, "value": value });
        self.session
            .client()
            .post("/pipeline-secrets", &query, Some(&body))?;
        Ok(())
    }

    /// Replaces a secret's value.
    pub fn update(&self, id: i64, value: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = json!({ "value": value });
        self.session
            .client()
            .put(&format!("/pipeline-secrets/{id}"), &query, &body)?;
        Ok(())
    }

    /// Deletes a secret by id.
    pub fn delete(&self, id: i64, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/pipeline-secrets/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_add_posts_name_and_value() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/pipeline-secrets")
            .match_query(mockito::Matcher::UrlEncoded("workspaceId".into(), "9".into()))
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "aws_key",
                "value": "s3cr3t"
            })))
            .with_body(r#"{"secretId": 11}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        SecretsApi::new(&session)
            .add("aws_key", "s3cr3t", Some(&ScopeRef::Id(9)))
            .unwrap();
        mock.assert();
    }

    #[test]
    fn test_update_puts_value_to_secret_path() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/pipeline-secrets/11")
            .match_body(mockito::Matcher::Json(serde_json::json!({"value": "rotated"})))
            .with_status(204)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        SecretsApi::new(&session).update(11, "rotated", None).unwrap();
        mock.assert();
    }

    #[test]
    fn test_get_unwraps_pipeline_secret_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/pipeline-secrets/11")
            .with_body(r#"{"pipelineSecret": {"id": 11, "name": "aws_key", "lastUsed": "2026-02-01"}}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let secret = SecretsApi::new(&session).get(11, None).unwrap();
        assert_eq!(secret.name, "aws_key");
        assert_eq!(secret.last_used.as_deref(), Some("2026-02-01"));
    }
}
