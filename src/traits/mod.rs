//! Trait abstractions for side-effect boundaries.
//!
//! These traits decouple the application core from concrete I/O so that
//! tests can substitute deterministic implementations.

mod http;
mod preferences;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::{
    encode_dark_mode, parse_dark_mode, PreferenceStore, DARK_MODE_KEY,
};
