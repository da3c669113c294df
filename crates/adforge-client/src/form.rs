//! Multipart body construction

use adforge_core::{GenerationRequest, SubmitError};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Text field carrying the website URL
pub const FIELD_WEBSITE_URL: &str = "website_url";
/// File field carrying the presentation
pub const FIELD_PPT_FILE: &str = "ppt_file";

/// Build the multipart body, appending only the fields that are present.
///
/// The presentation is read from disk here. A read failure means the request
/// cannot be sent, so it is reported as a network-class error.
pub async fn build_form(request: &GenerationRequest) -> Result<Form, SubmitError> {
    let mut form = Form::new();

    if let Some(url) = &request.website_url {
        form = form.text(FIELD_WEBSITE_URL, url.clone());
    }

    if let Some(file) = &request.presentation {
        let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
            SubmitError::network(format!(
                "Could not read {}: {}",
                file.path.display(),
                e
            ))
        })?;
        debug!(
            "Attaching {} ({} bytes) as {}",
            file.file_name,
            bytes.len(),
            FIELD_PPT_FILE
        );
        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())
            .map_err(|e| SubmitError::network(format!("Invalid upload type: {e}")))?;
        form = form.part(FIELD_PPT_FILE, part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::PresentationFile;

    #[tokio::test]
    async fn test_build_form_without_fields() {
        let form = build_form(&GenerationRequest::default()).await.unwrap();
        // An empty form still has a boundary but no parts
        assert!(!form.boundary().is_empty());
    }

    #[tokio::test]
    async fn test_build_form_missing_file_is_network_error() {
        let request = GenerationRequest {
            website_url: None,
            presentation: Some(PresentationFile::new("/definitely/not/here/deck.pptx")),
        };
        let err = build_form(&request).await.unwrap_err();
        assert!(matches!(err, SubmitError::Network { .. }));
        assert!(err.user_message().contains("deck.pptx"));
    }

    #[tokio::test]
    async fn test_build_form_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"PK\x03\x04 fake pptx").unwrap();

        let request = GenerationRequest {
            website_url: Some("https://acme.example".into()),
            presentation: Some(PresentationFile::new(&path)),
        };
        assert!(build_form(&request).await.is_ok());
    }
}
