//! Outcome taxonomy for a single submit attempt

use thiserror::Error;

/// Shown when the backend gives no usable message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate assets";

/// Why a submit attempt did not produce a result bundle.
///
/// The three kinds are kept apart for logging; the UI shows all of them the
/// same way through [`SubmitError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request could not be sent or the response could not be received
    #[error("network error: {message}")]
    Network { message: String },

    /// A response arrived but the backend reported failure
    #[error("server rejected the request (status {status}): {}", message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    ServerRejection {
        status: u16,
        message: Option<String>,
    },

    /// The body did not have the expected shape
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },
}

impl SubmitError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        Self::ServerRejection { status, message }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// The single inline message displayed under the form
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Network { message } => message.clone(),
            SubmitError::ServerRejection {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::ServerRejection { message: None, .. }
            | SubmitError::MalformedResponse { .. } => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
