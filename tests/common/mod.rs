//! Shared fixtures for integration tests.

// Each integration test binary compiles its own copy of this module and
// uses a different subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use pulse::adapters::mock::{InMemoryPreferences, MockHttpClient, MockResponse};
use pulse::app::App;
use pulse::traits::{HttpError, Response};
use pulse::users::UserClient;

/// Endpoint used by all mock-backed tests.
pub const TEST_ENDPOINT: &str = "https://api.test/users/1";

/// A JSON body matching the production payload shape, extra fields included.
pub const JOHN_DOE_JSON: &str =
    r#"{"id":1,"name":"John Doe","username":"jdoe","email":"john@example.com"}"#;

/// Build a mock HTTP client that answers the test endpoint with `body`.
pub fn mock_http_with_user(body: &str) -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        TEST_ENDPOINT,
        MockResponse::Success(Response::new(200, Bytes::from(body.to_string()))),
    );
    mock
}

/// Build a mock HTTP client whose test endpoint fails at transport level.
pub fn mock_http_failing() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        TEST_ENDPOINT,
        MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
    );
    mock
}

/// Build an `App` over the given mock client and preference store.
pub fn app_with(mock: &MockHttpClient, preferences: InMemoryPreferences) -> App {
    let client = UserClient::with_endpoint(Arc::new(mock.clone()), TEST_ENDPOINT);
    App::new(client, Box::new(preferences))
}
