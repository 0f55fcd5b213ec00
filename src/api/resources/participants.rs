//
//  floe-cli
//  api/resources/participants.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace participant accessor.
//!
//! Participants are addressed by organization and workspace together, so the
//! accessor resolves both halves of an `org/workspace` reference: the
//! organization id from the organization part and the workspace id from the
//! full reference.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::super::error::ApiError;
use super::super::pagination::PagedList;
use super::super::session::{ScopeKind, ScopeRef, Session};
use super::paged;

/// A member, team, or collaborator attached to a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Numeric participant id.
    #[serde(rename = "participantId")]
    pub id: i64,

    /// Participant type: `MEMBER`, `TEAM`, or `COLLABORATOR`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// User name, absent for team participants.
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,

    /// Email, absent for team participants.
    #[serde(default)]
    pub email: Option<String>,

    /// Role in the workspace, e.g. `owner`, `admin`, `maintain`, `launch`,
    /// `view`.
    #[serde(rename = "wspRole", default)]
    pub role: Option<String>,

    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accessor for the `/orgs/{orgId}/workspaces/{wsId}/participants` family.
pub struct ParticipantsApi<'a> {
    session: &'a Session,
}

impl<'a> ParticipantsApi<'a> {
    /// Creates the accessor over a session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Resolves the `/orgs/{orgId}/workspaces/{wsId}` path prefix.
    ///
    /// A qualified `org/workspace` reference yields the organization id from
    /// its first half. Numeric ids and bare workspace names carry no
    /// organization part, so the owning organization is looked up through the
    /// association row whose workspace id matches.
    fn path_prefix(&self, workspace: &ScopeRef) -> Result<String, ApiError> {
        let ws_id = self.session.resolve(workspace, ScopeKind::Workspace)?;
        let org_id = match workspace {
            ScopeRef::Name(name) if name.contains('/') => {
                let org_part = name.split('/').next().unwrap_or_default();
                self.session
                    .resolve(&ScopeRef::from(org_part), ScopeKind::Organization)?
            }
            _ => self
                .session
                .workspace_associations()?
                .into_iter()
                .find(|a| a.workspace_id == Some(ws_id))
                .map(|a| a.org_id)
                .ok_or_else(|| ApiError::UnknownScope {
                    kind: ScopeKind::Workspace,
                    reference: workspace.to_string(),
                })?,
        };
        Ok(format!("/orgs/{org_id}/workspaces/{ws_id}/participants"))
    }

    /// Lists participants of a workspace.
    pub fn list(&self, workspace: &ScopeRef) -> Result<PagedList<'a, Participant>, ApiError> {
        let path = self.path_prefix(workspace)?;
        paged(self.session, path, "participants", Vec::new())
    }

    /// Adds a member participant by email.
    pub fn add(&self, workspace: &ScopeRef, email: &str) -> Result<Participant, ApiError> {
        let path = format!("{}/add", self.path_prefix(workspace)?);
        let body = json!({ "userNameOrEmail": email });
        let response = self.session.client().put(&path, &[], &body)?;
        super::unwrap_entity(&response, "participant")
    }

    /// Changes a participant's workspace role.
    pub fn update_role(
        &self,
        workspace: &ScopeRef,
        participant_id: i64,
        role: &str,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}/role", self.path_prefix(workspace)?, participant_id);
        self.session
            .client()
            .put(&path, &[], &json!({ "role": role }))?;
        Ok(())
    }

    /// Removes a participant from the workspace.
    pub fn delete(&self, workspace: &ScopeRef, participant_id: i64) -> Result<(), ApiError> {
        let path = format!("{}/{}", self.path_prefix(workspace)?, participant_id);
        self.session.client().delete(&path, &[])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpClient;

    const ASSOCIATIONS: &str = r#"{
        "orgsAndWorkspaces": [
            {"orgId": 1, "orgName": "Acme", "workspaceId": 9, "workspaceName": "Prod"},
            {"orgId": 2, "orgName": "Umbrella", "workspaceId": 21, "workspaceName": "Lab"}
        ]
    }"#;

    fn mock_associations(server: &mut mockito::Server) {
        server
            .mock("GET", "/user-info")
            .with_body(r#"{"user": {"id": 42}}"#)
            .create();
        server
            .mock("GET", "/user/42/workspaces")
            .with_body(ASSOCIATIONS)
            .create();
    }

    #[test]
    fn test_numeric_id_finds_owning_org() {
        let mut server = mockito::Server::new();
        mock_associations(&mut server);
        let mock = server
            .mock("GET", "/orgs/1/workspaces/9/participants")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"participants": [{"participantId": 5, "userName": "jdoe"}], "totalSize": 1}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let participants: Vec<Participant> = ParticipantsApi::new(&session)
            .list(&ScopeRef::Id(9))
            .unwrap()
            .map(|p| p.unwrap())
            .collect();
        mock.assert();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].user_name.as_deref(), Some("jdoe"));
    }

    #[test]
    fn test_bare_name_finds_owning_org() {
        let mut server = mockito::Server::new();
        mock_associations(&mut server);
        let mock = server
            .mock("GET", "/orgs/2/workspaces/21/participants")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"participants": [], "totalSize": 0}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let participants: Vec<_> = ParticipantsApi::new(&session)
            .list(&ScopeRef::from("lab"))
            .unwrap()
            .collect();
        mock.assert();
        assert!(participants.is_empty());
    }

    #[test]
    fn test_unknown_workspace_id_is_an_error() {
        let mut server = mockito::Server::new();
        mock_associations(&mut server);

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let err = ParticipantsApi::new(&session)
            .list(&ScopeRef::Id(999))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownScope { .. }));
    }

    #[test]
    fn test_qualified_reference_uses_both_halves() {
        let mut server = mockito::Server::new();
        mock_associations(&mut server);
        let mock = server
            .mock("GET", "/orgs/1/workspaces/9/participants")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"participants": [], "totalSize": 0}"#)
            .create();

        let session = Session::new(HttpClient::new(&server.url(), "tok").unwrap());
        let participants: Vec<_> = ParticipantsApi::new(&session)
            .list(&ScopeRef::from("acme/prod"))
            .unwrap()
            .collect();
        mock.assert();
        assert!(participants.is_empty());
    }
}
