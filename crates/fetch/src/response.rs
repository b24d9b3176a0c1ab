//! Fetch result and body readers

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Result of a fetch call: response metadata plus on-demand body access
///
/// The status fields are captured once when the value is created and never
/// change afterwards. The response body is owned exclusively by this value;
/// every body-reading method takes `self`, so the body can be consumed at
/// most once and the underlying stream is released when the method returns,
/// on success and on failure alike. A second read does not compile.
#[derive(Debug)]
pub struct FetchResult {
    res: reqwest::Response,
    status: u16,
    status_text: String,
    ok: bool,
}

impl FetchResult {
    pub(crate) fn new(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let status_text = status.to_string();
        let ok = status_text.starts_with('2');
        Self {
            res,
            status,
            status_text,
            ok,
        }
    }

    /// Integer status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Decimal string form of the status code
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// True iff the status code is in the 2xx range
    pub fn ok(&self) -> bool {
        self.ok
    }

    /// Read-only access to the underlying response
    pub fn response(&self) -> &reqwest::Response {
        &self.res
    }

    /// Consume the handle and take ownership of the underlying response
    ///
    /// After this the caller is responsible for the body.
    pub fn into_response(self) -> reqwest::Response {
        self.res
    }

    /// Read the entire body into memory
    pub async fn bytes(self) -> Result<Vec<u8>, FetchError> {
        let bytes = self.res.bytes().await.map_err(FetchError::Read)?;
        Ok(bytes.to_vec())
    }

    /// Read the body and decode it as UTF-8 text
    ///
    /// Decoding is lossy: invalid byte sequences become replacement
    /// characters rather than errors.
    pub async fn text(self) -> Result<String, FetchError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the body and decode it as JSON into `T`
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!("Response body is not valid JSON: {}", err);
            FetchError::from(err)
        })
    }

    /// Read the body and decode it as a generic string-keyed JSON object
    ///
    /// Nested objects and arrays decode to nested [`Value`]s.
    pub async fn map(self) -> Result<Map<String, Value>, FetchError> {
        self.json().await
    }
}

// FetchResult carries a live response, so its tests are in
// tests/integration.rs using mockito.
