//
//  floe-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Floe API
//!
//! This module provides the transport boundary of the SDK: a thin blocking
//! HTTP client that owns base-URL composition, the bearer-token header, and
//! JSON (de)serialization. Everything above it works in terms of
//! `(method, path, query, body)` and never builds URLs itself.
//!
//! ## Overview
//!
//! - Every method performs exactly one HTTP round-trip; there are no retries
//!   and no backoff. A transient failure surfaces immediately.
//! - Every response is routed through [`classify`](super::error::classify),
//!   so callers receive either a parsed JSON body or a typed [`ApiError`].
//! - The client is strictly synchronous (`reqwest::blocking`); a hung request
//!   hangs the command, bounded only by the transport timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use floe_cli::api::HttpClient;
//!
//! let client = HttpClient::new("https://api.floe.io", "my-token")?;
//! let body = client.get("/pipelines", &[("max".to_string(), "10".to_string())])?;
//! println!("{} pipelines", body["totalSize"]);
//! # Ok::<(), floe_cli::api::ApiError>(())
//! ```

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::error::{classify, ApiError};

/// Default request timeout, in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Blocking HTTP client for the Floe API.
///
/// Owns the base URL and the access token; request paths are appended to the
/// base URL verbatim. One instance is shared by all accessors of a session.
pub struct HttpClient {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Creates a client for the given API endpoint and access token.
    ///
    /// A trailing slash on `base_url` is stripped so that paths like
    /// `/pipelines` concatenate cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("floe/{}", crate::VERSION))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Returns the base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request.
    pub fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.request(Method::GET, path, query, None)
    }

    /// Makes a POST request with an optional JSON body.
    pub fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.request(Method::POST, path, query, body)
    }

    /// Makes a PUT request with a JSON body.
    pub fn put(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, query, Some(body))
    }

    /// Makes a DELETE request.
    pub fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, query, None)
    }

    /// Performs one HTTP round-trip and classifies the response.
    ///
    /// # Errors
    ///
    /// Network failures convert into [`ApiError::Network`]; non-2xx
    /// responses come back as the classifier's typed failures.
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, ?query, "request");

        let mut request: RequestBuilder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let text = response.text().unwrap_or_default();
        debug!(status, body_len = text.len(), "response");

        classify(status, &text)
    }
}
