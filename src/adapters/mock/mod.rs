//! Mock implementations for testing.
//!
//! These test doubles implement the traits from `crate::traits` without
//! touching the network or file system.

pub mod http;
pub mod preferences;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use preferences::InMemoryPreferences;
