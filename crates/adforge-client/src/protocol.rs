//! Response envelope parsing
//!
//! Classification order follows the wire contract: the body is parsed first,
//! then the HTTP status and `success` flag are checked, and only then is the
//! nested `data` decoded into a typed bundle.

use adforge_core::{GenerationEnvelope, GenerationResult, SubmitError};

/// Longest body excerpt kept in a malformed-response detail
const BODY_EXCERPT_LEN: usize = 200;

/// Turn an HTTP status and raw body into a result bundle or a submit error.
pub fn parse_generation_response(
    status: u16,
    body: &[u8],
) -> Result<GenerationResult, SubmitError> {
    let envelope: GenerationEnvelope = serde_json::from_slice(body).map_err(|e| {
        SubmitError::malformed(format!(
            "status {status}: {e}: {}",
            excerpt(&String::from_utf8_lossy(body))
        ))
    })?;

    let status_ok = (200..300).contains(&status);
    if !status_ok || !envelope.success {
        return Err(SubmitError::rejected(status, envelope.error));
    }

    let data = envelope
        .data
        .ok_or_else(|| SubmitError::malformed("success response without data"))?;

    serde_json::from_value(data)
        .map_err(|e| SubmitError::malformed(format!("unexpected result shape: {e}")))
}

fn excerpt(body: &str) -> String {
    if body.chars().count() > BODY_EXCERPT_LEN {
        let cut: String = body.chars().take(BODY_EXCERPT_LEN).collect();
        format!("{cut}...[{} chars]", body.chars().count())
    } else {
        body.to_string()
    }
}
