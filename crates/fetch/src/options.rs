//! Request configuration

use std::collections::HashMap;

use reqwest::Body;

/// Per-request configuration: method, headers, and an optional body
///
/// Unset fields fall back to a bare GET with no headers and no body, so
/// `FetchOptions::new()` describes the same request as passing no
/// configuration at all.
#[derive(Debug, Default)]
pub struct FetchOptions {
    pub(crate) method: Option<String>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Body>,
}

impl FetchOptions {
    /// Create an empty configuration (GET, no headers, no body)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method (GET when unset or empty)
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Add a header, replacing any previous value for the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merge a map of headers, replacing previous values on name collisions
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the request body
    ///
    /// Accepts anything reqwest can turn into a body: byte vectors,
    /// strings, or streams.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }
}
