//
//  floe-cli
//  api/resources/credentials.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Credentials accessor.
//!
//! `/credentials` does not paginate server-side and reports no `totalSize`;
//! the sequence still goes through [`PagedList`] so callers see one uniform
//! listing shape, with the list length standing in for the total.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeRef, Session};
use super::{find_by_name, paged, unwrap_entity, workspace_query};

/// A stored credentials record (the secret material itself is never
/// returned by the API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque credentials id.
    pub id: String,

    /// Name, unique within its workspace.
    pub name: String,

    /// Provider discriminator, e.g. `aws`, `google`, `ssh`, `container-reg`.
    #[serde(default)]
    pub provider: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/credentials` endpoint family.
pub struct CredentialsApi<'a> {
    session: &'a Session,
}

impl<'a> CredentialsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists credentials in the given scope.
    pub fn list(&self, scope: Option<&ScopeRef>) -> Result<PagedList<'a, Credential>, ApiError> {
        let query = workspace_query(self.session, scope)?;
        paged(self.session, "/credentials".to_string(), "credentials", query)
    }

    /// Fetches one credentials record by id.
    pub fn get(&self, id: &str, scope: Option<&ScopeRef>) -> Result<Credential, ApiError> {
        let query = workspace_query(self.session, scope)?;
        let body = self
            .session
            .client()
            .get(&format!("/credentials/{id}"), &query)?;
        unwrap_entity(&body, "credentials")
    }

    /// Finds a credentials record by exact name.
    pub fn find_by_name(
        &self,
        name: &str,
        scope: Option<&ScopeRef>,
    ) -> Result<Credential, ApiError> {
        find_by_name(self.list(scope)?, "credentials", name, scope, |c| {
            c.name.as_str()
        })
    }

    /// Deletes a credentials record by id.
    pub fn delete(&self, id: &str, scope: Option<&ScopeRef>) -> Result<(), ApiError> {
        let query = workspace_query(self.session, scope)?;
        self.session
            .client()
            .delete(&format!("/credentials/{id}"), &query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    #[test]
    fn test_unpaginated_listing_fetches_once() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/credentials")
            .match_query(mockito::Matcher::Any)
            .with_body(
                r#"{"credentials": [
                    {"id": "a", "name": "aws-prod", "provider": "aws"},
                    {"id": "b", "name": "gh-token", "provider": "github"}
                ]}"#,
            )
            .expect(1)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let mut list = CredentialsApi::new(&session).list(None).unwrap();
        // No totalSize in the body: list length becomes the total
        assert_eq!(list.total_size().unwrap(), 2);
        let names: Vec<String> = list.map(|c| c.unwrap().name).collect();
        assert_eq!(names, vec!["aws-prod", "gh-token"]);
    }
}
