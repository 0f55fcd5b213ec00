//
//  floe-cli
//  api/resources/orgs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Organization accessor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeKind, ScopeRef, Session};
use super::{paged, unwrap_entity};

/// An organization the current user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Numeric organization id.
    #[serde(rename = "orgId")]
    pub id: i64,

    /// Unique organization name.
    pub name: String,

    /// Display name.
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/orgs` endpoint family.
pub struct OrgsApi<'a> {
    session: &'a Session,
}

impl<'a> OrgsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the user's organizations.
    pub fn list(&self) -> Result<PagedList<'a, Organization>, ApiError> {
        paged(
            self.session,
            "/orgs".to_string(),
            "organizations",
            Vec::new(),
        )
    }

    /// Fetches one organization by reference (name or id).
    pub fn get(&self, org: &ScopeRef) -> Result<Organization, ApiError> {
        let org_id = self.session.resolve(org, ScopeKind::Organization)?;
        let body = self.session.client().get(&format!("/orgs/{org_id}"), &[])?;
        unwrap_entity(&body, "organization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_list_uses_organizations_field() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/orgs")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
                mockito::Matcher::UrlEncoded("max".into(), "50".into()),
            ]))
            .with_body(
                r#"{"organizations": [
                    {"orgId": 1, "name": "acme", "fullName": "Acme Corp"},
                    {"orgId": 2, "name": "umbrella"}
                ], "totalSize": 2}"#,
            )
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let names: Vec<String> = OrgsApi::new(&session)
            .list()
            .unwrap()
            .map(|o| o.unwrap().name)
            .collect();
        assert_eq!(names, vec!["acme", "umbrella"]);
    }

    #[test]
    fn test_get_unwraps_organization_field() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/orgs/2")
            .with_body(r#"{"organization": {"orgId": 2, "name": "umbrella", "fullName": "Umbrella Inc"}}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let org = OrgsApi::new(&session).get(&ScopeRef::Id(2)).unwrap();
        mock.assert();
        assert_eq!(org.id, 2);
        assert_eq!(org.full_name.as_deref(), Some("Umbrella Inc"));
    }
}
