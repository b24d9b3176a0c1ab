//! Fetch-style convenience wrapper around reqwest
//!
//! This crate issues a single HTTP request per call and returns a
//! [`FetchResult`] bundling the status code, its decimal text form, an `ok`
//! flag for the 2xx range, and lazy body readers (bytes, text, JSON).
//! There is no retry, timeout, or pooling policy here; callers needing those
//! configure their own [`reqwest::Client`] and hand it to
//! [`Fetcher::from_client`].
//!
//! # Example
//!
//! ```no_run
//! use fetch::{fetch_with, FetchOptions};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ApiResponse {
//!     message: String,
//! }
//!
//! async fn example() -> Result<ApiResponse, fetch::FetchError> {
//!     let options = FetchOptions::new().header("accept", "application/json");
//!     let result = fetch_with("https://api.example.com/data", options).await?;
//!     assert!(result.ok());
//!     result.json().await
//! }
//! ```

mod client;
mod error;
mod options;
mod response;

pub use client::{fetch, fetch_with, Fetcher};
pub use error::FetchError;
pub use options::FetchOptions;
pub use response::FetchResult;
