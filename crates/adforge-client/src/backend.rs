//! Backend abstraction
//!
//! The TEA action layer only needs "send this request, give me a bundle or a
//! submit error". Keeping that behind a trait lets the app crate drive its
//! action tests with an in-memory backend.

use adforge_core::{GenerationRequest, GenerationResult, SubmitError};

/// One-shot generation call.
///
/// `GenerationBackend` is the `Send` variant used by spawned tasks.
#[trait_variant::make(GenerationBackend: Send)]
pub trait LocalGenerationBackend {
    /// Submit `request` and wait for the backend's answer. Exactly one
    /// outbound call per invocation, no retries.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, SubmitError>;
}
