//! # adforge-core - Core Domain Types
//!
//! Foundation crate for adforge. Provides the generation request/result model,
//! the submit error taxonomy, infrastructure error handling, and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Generation Model (`generation`)
//! - [`GenerationRequest`] - Optional website URL and/or presentation file
//! - [`PresentationFile`] - A presentation document selected for upload
//! - [`GenerationResult`] - The result bundle returned by the backend
//! - [`MarketingBrief`], [`EmailDraft`], [`AdImagePrompts`], [`ImagePrompt`], [`GeneratedImage`]
//! - [`GenerationEnvelope`] - The `{ success, data, error }` response wrapper
//!
//! ### Submit Outcome (`submit`)
//! - [`SubmitError`] - Network, server rejection, or malformed response
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use adforge_core::prelude::*;
//! ```

pub mod error;
pub mod generation;
pub mod logging;
pub mod submit;

/// Prelude for common imports used throughout all adforge crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use generation::{
    AdImagePrompts, EmailDraft, GeneratedImage, GenerationEnvelope, GenerationRequest,
    GenerationResult, ImagePrompt, MarketingBrief, PresentationFile,
};
pub use submit::{SubmitError, FALLBACK_ERROR_MESSAGE};
