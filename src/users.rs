//! User record model and fetch client.
//!
//! The user card issues a single GET against a JSON endpoint and renders
//! the `name` and `email` fields of the returned record. The endpoint is
//! fixed in production and injectable for tests.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::traits::{Headers, HttpClient, HttpError};

/// Endpoint serving the displayed user record.
pub const USER_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users/1";

/// A fetched user record.
///
/// The response body may carry more fields; only these two are displayed
/// and everything else is ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// Errors produced by a user fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, ...)
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The server answered with a non-success status
    #[error("unexpected status {status}")]
    Status { status: u16 },
    /// The body was not a valid user record
    #[error("invalid user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for fetching the displayed user record.
///
/// Wraps an [`HttpClient`] implementation behind an `Arc` so spawned fetch
/// tasks can hold a clone.
#[derive(Clone)]
pub struct UserClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
}

impl UserClient {
    /// Create a client against the production endpoint.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_endpoint(http, USER_ENDPOINT)
    }

    /// Create a client against a custom endpoint (tests, local stubs).
    pub fn with_endpoint(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the user record.
    ///
    /// Exactly one GET, no retries, no custom headers.
    pub async fn fetch_user(&self) -> Result<UserRecord, FetchError> {
        let response = self.http.get(&self.endpoint, &Headers::new()).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        Ok(response.json::<UserRecord>()?)
    }
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
