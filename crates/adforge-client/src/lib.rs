//! # adforge-client - Generation Backend Client
//!
//! Talks to the generation backend: encodes the multipart submission, issues
//! the single POST, and turns the `{ success, data, error }` envelope into a
//! [`GenerationResult`](adforge_core::GenerationResult) or a
//! [`SubmitError`](adforge_core::SubmitError).
//!
//! Depends on [`adforge_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`GenerationClient`] - reqwest-backed implementation of the backend call
//! - [`GenerationBackend`] - `Send` async trait implemented by the client (and by test fakes)
//!
//! ### Endpoints
//! - [`Endpoints`] - Resolved `POST /api/generate` and `GET /static/` URLs for an origin
//!
//! ### Protocol Parsing
//! - [`parse_generation_response()`] - Classify a status + body into result or error
//!
//! ### Multipart
//! - [`build_form()`] - Build the multipart body with only the present fields

pub mod backend;
pub mod client;
pub mod endpoints;
pub mod form;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{GenerationBackend, LocalGenerationBackend};
pub use client::GenerationClient;
pub use endpoints::{Endpoints, DEFAULT_GENERATE_PATH, DEFAULT_ORIGIN, DEFAULT_STATIC_PATH};
pub use form::{build_form, FIELD_PPT_FILE, FIELD_WEBSITE_URL};
pub use protocol::parse_generation_response;
