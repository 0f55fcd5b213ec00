//
//  floe-cli
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Error Taxonomy and Response Classification
//!
//! This module provides the unified error type for all Floe API operations
//! and the classifier that turns raw HTTP responses into either parsed JSON
//! bodies or typed failures.
//!
//! ## Overview
//!
//! Every HTTP response flows through [`classify`] exactly once, at the
//! transport boundary. Success responses come back as a parsed
//! [`serde_json::Value`]; failure responses come back as an [`ApiError`]
//! variant chosen from the status code:
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | `Ok(body)` — empty object when the body is missing or malformed |
//! | 401 | [`ApiError::Unauthorized`] |
//! | 403, 404 | [`ApiError::NotFound`] |
//! | 400 | [`ApiError::InvalidRequest`] |
//! | other | [`ApiError::Api`] with the numeric status |
//!
//! 403 is deliberately folded into not-found: the Floe platform masks the
//! existence of resources the caller cannot access behind permission errors,
//! so distinguishing the two would leak nothing useful to the user.
//!
//! ## Message Extraction
//!
//! Error messages are pulled from the response body's `message` field, then
//! its `error` field, then the raw body text, falling back to `"HTTP <status>"`
//! when the body is empty.
//!
//! # Example
//!
//! ```rust
//! use floe_cli::api::{classify, ApiError};
//!
//! let err = classify(404, r#"{"message": "pipeline not found"}"#).unwrap_err();
//! assert!(matches!(err, ApiError::NotFound(m) if m == "pipeline not found"));
//! ```

use serde_json::Value;
use thiserror::Error;

use super::session::ScopeKind;

/// Unified error type for all Floe API operations.
///
/// Typed failures are constructed only by [`classify`] (status-derived
/// variants) and by the two dedicated wrapping sites: the reference resolver
/// ([`ApiError::UnknownScope`]) and accessor by-name lookups
/// ([`ApiError::NotFoundInWorkspace`]). Nothing else builds these variants
/// ad hoc.
///
/// # Example
///
/// ```rust
/// use floe_cli::api::ApiError;
///
/// fn report(err: &ApiError) {
///     match err {
///         ApiError::Unauthorized(_) => eprintln!("Please check your access token"),
///         ApiError::NotFound(m) => eprintln!("Not found: {m}"),
///         e => eprintln!("Error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed (HTTP 401).
    ///
    /// The message already carries the `Unauthorized: ` prefix so the CLI can
    /// print it as-is.
    #[error("{0}")]
    Unauthorized(String),

    /// The requested resource was not found (HTTP 404, or HTTP 403 — the
    /// platform masks existence with permission errors).
    #[error("{0}")]
    NotFound(String),

    /// The request was malformed or contained invalid parameters (HTTP 400),
    /// or a client-side precondition failed (for example a zero page size).
    #[error("{0}")]
    InvalidRequest(String),

    /// Any other non-success response, carrying the numeric status.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code of the failed response.
        status: u16,
        /// The extracted error message.
        message: String,
    },

    /// A reference string could not be resolved to an organization or
    /// workspace id.
    ///
    /// Carries the original (non-normalized) reference text for user-facing
    /// messages.
    #[error("{kind} '{reference}' not found")]
    UnknownScope {
        /// Whether an organization or a workspace was being resolved.
        kind: ScopeKind,
        /// The reference exactly as the user typed it.
        reference: String,
    },

    /// A by-name lookup scanned a full listing without finding a match.
    ///
    /// Wraps what would otherwise be a bare not-found with the entity kind
    /// and the workspace context the scan ran in.
    #[error("{kind} '{name}' not found in {workspace}")]
    NotFoundInWorkspace {
        /// The entity kind, e.g. `"pipeline"`.
        kind: &'static str,
        /// The name that was searched for.
        name: String,
        /// Human-readable workspace context, e.g. `"workspace 'acme/prod'"`.
        workspace: String,
    },

    /// A network-level error (connection failure, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Classifies an HTTP response into a parsed body or a typed failure.
///
/// This is the single choke point between the transport and the rest of the
/// SDK. Success bodies that are empty or not valid JSON classify as an empty
/// JSON object rather than an error — a 2xx never fails here.
///
/// # Parameters
///
/// * `status` - The HTTP status code of the response
/// * `body` - The raw response body text (possibly empty)
///
/// # Returns
///
/// - `Ok(Value)` - The parsed JSON body for 2xx responses
/// - `Err(ApiError)` - The typed failure for everything else
///
/// # Example
///
/// ```rust
/// use floe_cli::api::classify;
///
/// let body = classify(200, r#"{"pipelines": []}"#).unwrap();
/// assert!(body.get("pipelines").is_some());
///
/// // Malformed success bodies never raise
/// let body = classify(204, "").unwrap();
/// assert_eq!(body, serde_json::json!({}));
/// ```
pub fn classify(status: u16, body: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default())));
    }

    let message = extract_message(status, body);
    Err(match status {
        401 => ApiError::Unauthorized(format!("Unauthorized: {message}")),
        403 | 404 => ApiError::NotFound(message),
        400 => ApiError::InvalidRequest(message),
        _ => ApiError::Api { status, message },
    })
}

/// Extracts a human-readable message from an error response body.
///
/// Tries the `message` field, then the `error` field, then the raw body
/// text, and finally falls back to `"HTTP <status>"` when the body is blank.
fn extract_message(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = json.get("error").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_with_body() {
        let body = classify(200, r#"{"totalSize": 3}"#).unwrap();
        assert_eq!(body["totalSize"], 3);
    }

    #[test]
    fn test_classify_success_empty_body() {
        let body = classify(204, "").unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_classify_success_malformed_body() {
        // A 2xx never raises, even when the body is not JSON
        let body = classify(200, "<html>oops</html>").unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify(401, r#"{"message": "token expired"}"#).unwrap_err();
        match err {
            ApiError::Unauthorized(m) => assert_eq!(m, "Unauthorized: token expired"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unauthorized_empty_body() {
        let err = classify(401, "").unwrap_err();
        match err {
            ApiError::Unauthorized(m) => assert_eq!(m, "Unauthorized: HTTP 401"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_forbidden_masks_as_not_found() {
        let err = classify(403, r#"{"message": "forbidden"}"#).unwrap_err();
        match err {
            ApiError::NotFound(m) => assert_eq!(m, "forbidden"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(404, r#"{"error": "no such workflow"}"#).unwrap_err();
        match err {
            ApiError::NotFound(m) => assert_eq!(m, "no such workflow"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_bad_request() {
        let err = classify(400, r#"{"message": "missing name"}"#).unwrap_err();
        match err {
            ApiError::InvalidRequest(m) => assert_eq!(m, "missing name"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_generic_with_raw_body() {
        let err = classify(502, "bad gateway").unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_message_extraction_prefers_message_field() {
        let body = r#"{"message": "first", "error": "second"}"#;
        assert_eq!(extract_message(500, body), "first");
    }
}
