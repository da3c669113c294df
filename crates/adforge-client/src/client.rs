//! reqwest-backed generation client

use adforge_core::prelude::*;
use adforge_core::{GenerationRequest, GenerationResult, SubmitError};
use reqwest::Client;

use crate::backend::GenerationBackend;
use crate::endpoints::Endpoints;
use crate::form::build_form;
use crate::protocol::parse_generation_response;

/// Client for `POST /api/generate`.
///
/// No timeout and no retry are configured: a request resolves, fails, or is
/// abandoned when its task is aborted.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    endpoints: Endpoints,
}

impl GenerationClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("adforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn send(&self, request: GenerationRequest) -> std::result::Result<GenerationResult, SubmitError> {
        let url = self.endpoints.generate_url().clone();
        info!(
            "Submitting generation request to {} (url: {}, file: {})",
            url,
            request.website_url.as_deref().unwrap_or("-"),
            request
                .presentation
                .as_ref()
                .map(|f| f.file_name.as_str())
                .unwrap_or("-")
        );

        let form = build_form(&request).await?;

        let response = self
            .http
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Generation request to {} failed: {}", url, e);
                SubmitError::network(format!("Could not reach {}: {}", self.endpoints.origin(), e))
            })?;

        let status = response.status().as_u16();
        debug!("Generation response status: {}", status);

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read generation response body: {}", e);
            SubmitError::network(format!("Connection lost while reading the response: {e}"))
        })?;

        parse_generation_response(status, &body)
    }
}

impl GenerationBackend for GenerationClient {
    async fn generate(&self, request: GenerationRequest) -> std::result::Result<GenerationResult, SubmitError> {
        let outcome = self.send(request).await;
        match &outcome {
            Ok(result) => info!(
                "Generation succeeded: {} prompts, {} images",
                result.ad_image_prompts.prompts.len(),
                result.creative_assets().map_or(0, |images| images.len())
            ),
            Err(e) => warn!("Generation failed: {}", e),
        }
        outcome
    }
}
