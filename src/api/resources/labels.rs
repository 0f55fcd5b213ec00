//
//  floe-cli
//  api/resources/labels.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Label accessor.
//!
//! Labels come in two flavours: simple labels (a bare name) and resource
//! labels (`name=value` pairs applied to cloud resources at launch).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{paged, workspace_query};

/// A workspace label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Numeric label id.
    pub id: i64,

    /// Label name.
    pub name: String,

    /// Value, present only for resource labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether this is a resource label.
    #[serde(default)]
    pub resource: bool,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/labels` endpoint family.
pub struct LabelsApi<'a> {
    session: &'a Session,
}

impl<'a> LabelsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists labels in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, Label>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/labels".to_string(), "labels", query)
    }

    /// Creates a label. A non-`None` value makes it a resource label.
    pub fn add(
        &self,
        name: &str,
        value: Option<&str>,
        scope: Option<&ScopeRef>,
    ) -> Result<Label, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = json!({ "name": name, "value": value, "resource": value.is_some() });
        let response = self.session.client().post("/labels", &query, Some(&body))?;
        serde_json::from_value(response)
            .map_err(|e| ApiError::InvalidRequest(format!("malformed label response: {e}")))
    }

    /// Renames a label (and updates its value for resource labels).
    pub fn update(
        &self,
        id: i64,
        name: &str,
        value: Option<&str>,
        scope: Option<&ScopeRef>,
    ) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = json!({ "name": name, "value": value });
        self.session
            .client()
            .put(&format!("/labels/{id}"), &query, &body)?;
        Ok(())
    }

    /// Deletes a label by id.
    pub fn delete(&self, id: i64, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/labels/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_add_resource_label_sets_resource_flag() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/labels")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "env",
                "value": "prod",
                "resource": true
            })))
            .with_body(r#"{"id": 5, "name": "env", "value": "prod", "resource": true}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let label = LabelsApi::new(&session)
            .add("env", Some("prod"), None)
            .unwrap();
        mock.assert();
        assert_eq!(label.id, 5);
        assert!(label.resource);
    }

    #[test]
    fn test_add_simple_label_has_no_value() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/labels")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "nightly",
                "value": null,
                "resource": false
            })))
            .with_body(r#"{"id": 6, "name": "nightly", "resource": false}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let label = LabelsApi::new(&session).add("nightly", None, None).unwrap();
        mock.assert();
        assert!(label.value.is_none());
        assert!(!label.resource);
    }

    #[test]
    fn test_update_puts_to_label_path() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/labels/5")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "env",
                "value": "staging"
            })))
            .with_status(204)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        LabelsApi::new(&session)
            .update(5, "env", Some("staging"), None)
            .unwrap();
        mock.assert();
    }
}
