// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::headers::HeaderMap;

/// An intercepted HTTP request as reported by a capture agent.
///
/// Immutable once constructed: fields are private and only exposed through
/// accessors. Every worker receives the same value read-only.
///
/// # Example
/// ```json
/// {
///   "method": "GET",
///   "url": "http://example.com",
///   "headers": {"User-Agent": "Test"},
///   "post_data": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestData {
    method: String,
    url: String,
    #[serde(default)]
    headers: HeaderMap,
    #[serde(default)]
    post_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect_to: Option<String>,
    #[serde(default)]
    is_iframe: bool,
}

impl HttpRequestData {
    pub fn new(method: impl Into<String>, url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers,
            post_data: None,
            redirect_from: None,
            redirect_to: None,
            is_iframe: false,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.post_data = Some(body.into());
        self
    }

    pub fn with_redirect(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.redirect_from = from;
        self.redirect_to = to;
        self
    }

    pub fn in_iframe(mut self, is_iframe: bool) -> Self {
        self.is_iframe = is_iframe;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.post_data.as_deref()
    }

    pub fn redirect_from(&self) -> Option<&str> {
        self.redirect_from.as_deref()
    }

    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    pub fn is_iframe(&self) -> bool {
        self.is_iframe
    }
}

/// The user a request was captured under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

impl UserRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            application: None,
        }
    }
}
