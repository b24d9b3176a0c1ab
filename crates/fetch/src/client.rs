//! Fetch entry points

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::error::FetchError;
use crate::options::FetchOptions;
use crate::response::FetchResult;

/// Client wrapper issuing fetch-style requests
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher with a default client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher from a caller-configured client
    ///
    /// This is the supported route for timeouts, proxies, and TLS settings,
    /// none of which this crate configures itself.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// GET the address with no headers and no body
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.fetch_with(url, FetchOptions::new()).await
    }

    /// Issue a request with explicit configuration
    ///
    /// The URL, method, and every header are validated before any I/O
    /// happens; validation failures come back as
    /// [`FetchError::RequestConstruction`].
    pub async fn fetch_with(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> Result<FetchResult, FetchError> {
        let url = Url::parse(url)
            .map_err(|e| FetchError::RequestConstruction(format!("invalid url: {}", e)))?;
        let method = match options.method.as_deref() {
            None | Some("") => Method::GET,
            Some(m) => Method::from_bytes(m.as_bytes())
                .map_err(|_| FetchError::RequestConstruction(format!("invalid method: {}", m)))?,
        };

        tracing::debug!("Sending {} request to {}", method, url);

        let mut request = self.client.request(method, url);
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                FetchError::RequestConstruction(format!("invalid header name {:?}: {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                FetchError::RequestConstruction(format!("invalid value for header {}: {}", name, e))
            })?;
            request = request.header(name, value);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(FetchError::from)?;
        Ok(FetchResult::new(response))
    }
}

/// GET the address with no headers and no body, using a fresh client
pub async fn fetch(url: &str) -> Result<FetchResult, FetchError> {
    fetch_with(url, FetchOptions::new()).await
}

/// Issue a request with explicit configuration, using a fresh client
///
/// Every call builds its own client; nothing is shared or pooled between
/// calls. Reuse a [`Fetcher`] instead when connection reuse matters.
pub async fn fetch_with(url: &str, options: FetchOptions) -> Result<FetchResult, FetchError> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| FetchError::ClientInitialization(e.to_string()))?;
    Fetcher::from_client(client).fetch_with(url, options).await
}
