//! Test utilities for client types
//!
//! Provides sample bundles and a scripted in-memory backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use adforge_core::{GenerationRequest, GenerationResult, SubmitError};

use crate::backend::GenerationBackend;

/// A result bundle with one key benefit, two image prompts and no images.
pub fn sample_result_json() -> serde_json::Value {
    serde_json::json!({
        "marketing_brief": {
            "product_or_service": "Acme Rockets",
            "target_audience": "Desert hunters",
            "value_proposition": "Catch anything that runs",
            "tone_of_voice": "Bold",
            "key_benefits": ["Reaches 300 mph"]
        },
        "email": {
            "subject": "Meet Acme Rockets",
            "body": "Hi there,\nOur rockets are ready.\n-- Acme"
        },
        "ad_image_prompts": {
            "prompts": [
                { "angle_name": "Speed", "prompt": "A rocket leaving a dust trail" },
                { "angle_name": "Reliability", "prompt": "A rocket on a launch pad at dawn" }
            ]
        }
    })
}

/// `sample_result_json()` with the given generated images attached
pub fn sample_result_json_with_images(images: &[(&str, &str)]) -> serde_json::Value {
    let mut value = sample_result_json();
    value["generated_images"] = images
        .iter()
        .map(|(angle, url)| serde_json::json!({ "angle_name": angle, "image_url": url }))
        .collect();
    value
}

/// Typed form of [`sample_result_json`]
pub fn sample_result() -> GenerationResult {
    serde_json::from_value(sample_result_json()).expect("sample bundle is valid")
}

/// Typed form of [`sample_result_json_with_images`]
pub fn sample_result_with_images(images: &[(&str, &str)]) -> GenerationResult {
    serde_json::from_value(sample_result_json_with_images(images)).expect("sample bundle is valid")
}

/// Wrap a bundle in a `{ success: true, data }` envelope
pub fn success_body(data: serde_json::Value) -> String {
    serde_json::json!({ "success": true, "data": data }).to_string()
}

/// Backend that replays queued outcomes and records every request it sees.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    outcomes: Arc<Mutex<VecDeque<Result<GenerationResult, SubmitError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_outcome(&self, outcome: Result<GenerationResult, SubmitError>) {
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .push_back(outcome);
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, SubmitError> {
        self.requests.lock().expect("requests lock").push(request);
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::network("no scripted outcome")))
    }
}
