//
//  floe-cli
//  api/resources/datasets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Dataset accessor.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A versioned tabular dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Opaque dataset id.
    pub id: String,

    /// Name, unique within its workspace.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Media type of the uploaded content, e.g. `text/csv`.
    #[serde(rename = "mediaType", default)]
    pub media_type: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/datasets` endpoint family.
pub struct DatasetsApi<'a> {
    session: &'a Session,
}

impl<'a> DatasetsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists datasets in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, Dataset>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/datasets".to_string(), "datasets", query)
    }

    /// Fetches one dataset by id.
    pub fn get(&self, id: &str, scope: Option<&ScopeRef>) -> Result<Dataset, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self.session.client().get(&format!("/datasets/{id}"), &query)?;
        unwrap_entity(&body, "dataset")
    }

    /// Finds a dataset by exact name.
    pub fn find_by_name(&self, name: &str, scope: Option<&ScopeRef>) -> Result<Dataset, ApiError> {
        find_by_name(self.list(scope)?, "dataset", name, scope, |d| d.name.as_str())
    }

    /// Creates a dataset.
    pub fn add(
        &self,
        name: &str,
        description: Option<&str>,
        scope: Option<&ScopeRef>,
    ) -> Result<Dataset, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = json!({ "name": name, "description": description });
        let response = self.session.client().post("/datasets", &query, Some(&body))?;
        unwrap_entity(&response, "dataset")
    }

    /// Deletes a dataset by id.
    pub fn delete(&self, id: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/datasets/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_add_posts_payload() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/datasets")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"name": "samples", "description": "sample sheet"}),
            ))
            .with_body(r#"{"dataset": {"id": "d1", "name": "samples"}}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let dataset = DatasetsApi::new(&session)
            .add("samples", Some("sample sheet"), None)
            .unwrap();
        mock.assert();
        assert_eq!(dataset.id, "d1");
    }
}
