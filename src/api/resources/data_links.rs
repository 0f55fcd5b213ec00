//
//  floe-cli
//  api/resources/data_links.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Data link accessor (cloud bucket mounts browsable from the platform).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A data link to an external storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataLink {
    /// Opaque data link id.
    pub id: String,

    /// Data link name.
    pub name: String,

    /// Storage provider, e.g. `aws`, `google`, `azure`.
    #[serde(default)]
    pub provider: Option<String>,

    /// Resource reference, e.g. an `s3://bucket/prefix` URI.
    #[serde(rename = "resourceRef", default)]
    pub resource_ref: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/data-links` endpoint family.
pub struct DataLinksApi<'a> {
    session: &'a Session,
}

impl<'a> DataLinksApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists data links in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, DataLink>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/data-links".to_string(), "dataLinks", query)
    }

    /// Fetches one data link by id.
    pub fn get(&self, id: &str, scope: Option<&ScopeRef>) -> Result<DataLink, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self
            .session
            .client()
            .get(&format!("/data-links/{id}"), &query)?;
        unwrap_entity(&body, "dataLink")
    }

    /// Finds a data link by exact name.
    pub fn find_by_name(&self, name: &str, scope: Option<&ScopeRef>) -> Result<DataLink, ApiError> {
        find_by_name(self.list(scope)?, "data link", name, scope, |d| {
            d.name.as_str()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_list_uses_data_links_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/data-links")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("workspaceId".into(), "9".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_body(
                r#"{"dataLinks": [
                    {"id": "dl-1", "name": "raw-reads", "provider": "aws", "resourceRef": "s3://bucket/reads"}
                ], "totalSize": 1}"#,
            )
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let links: Vec<DataLink> = DataLinksApi::new(&session)
            .list(Some(&ScopeRef::Id(9)))
            .unwrap()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].resource_ref.as_deref(), Some("s3://bucket/reads"));
    }

    #[test]
    fn test_get_unwraps_data_link_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/data-links/dl-1")
            .with_body(r#"{"dataLink": {"id": "dl-1", "name": "raw-reads"}}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let link = DataLinksApi::new(&session).get("dl-1", None).unwrap();
        assert_eq!(link.name, "raw-reads");
    }
}
