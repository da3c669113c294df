//! Generation request and result model
//!
//! The result bundle mirrors the backend's JSON (snake_case keys). It is
//! immutable once received and is shared between views as an
//! `Arc<GenerationResult>`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// MIME type sent for `.pptx` uploads
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// A presentation document chosen for upload.
///
/// Only the location is kept here; the bytes are read when the request is
/// actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl PresentationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "presentation.pptx".to_string());
        Self { path, file_name }
    }

    /// Lowercased extension without the dot, if any
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }

    /// Whether the file's extension is one of `accepted` (case-insensitive,
    /// leading dots ignored)
    pub fn has_accepted_extension(&self, accepted: &[String]) -> bool {
        match self.extension() {
            Some(ext) => accepted
                .iter()
                .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }

    /// MIME type for the multipart part
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pptx") => PPTX_MIME,
            Some("ppt") => "application/vnd.ms-powerpoint",
            Some("odp") => "application/vnd.oasis.opendocument.presentation",
            Some("pdf") => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

/// What the user submitted: a website URL, a presentation, both, or neither.
///
/// Neither field is required; the backend decides what an empty request means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub website_url: Option<String>,
    pub presentation: Option<PresentationFile>,
}

impl GenerationRequest {
    /// Build a request from raw form input. Blank URL text is treated as absent.
    pub fn from_form(url: &str, presentation: Option<PresentationFile>) -> Self {
        let url = url.trim();
        Self {
            website_url: (!url.is_empty()).then(|| url.to_string()),
            presentation,
        }
    }
}

/// The result bundle returned on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub marketing_brief: MarketingBrief,
    pub email: EmailDraft,
    pub ad_image_prompts: AdImagePrompts,
    /// Present only if image generation succeeded upstream
    #[serde(default)]
    pub generated_images: Option<Vec<GeneratedImage>>,
}

impl GenerationResult {
    /// Generated images, or `None` when absent, null, or empty
    pub fn creative_assets(&self) -> Option<&[GeneratedImage]> {
        self.generated_images
            .as_deref()
            .filter(|images| !images.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingBrief {
    #[serde(default)]
    pub product_or_service: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub value_proposition: String,
    #[serde(default)]
    pub tone_of_voice: String,
    #[serde(default)]
    pub key_benefits: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// Ad image prompts. The backend nests the list under `prompts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdImagePrompts {
    #[serde(default)]
    pub prompts: Vec<ImagePrompt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    pub angle_name: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub angle_name: String,
    /// Path relative to the backend's static asset root
    pub image_url: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Response wrapper: `{ success, data?, error? }`.
///
/// `data` stays untyped until `success` has been checked so that a rejected
/// response with an unexpected payload is still reported as a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "marketing_brief": {
            "product_or_service": "Acme Rockets",
            "target_audience": "Coyotes",
            "value_proposition": "Catch anything",
            "tone_of_voice": "Bold",
            "key_benefits": ["Fast"]
        },
        "email": { "subject": "Launch day", "body": "Hi,\nWe are live." },
        "ad_image_prompts": {
            "prompts": [
                { "angle_name": "Speed", "prompt": "A rocket at dawn" },
                { "angle_name": "Trust", "prompt": "A smiling coyote" }
            ]
        }
    }"#;

    #[test]
    fn test_result_parses_without_generated_images() {
        let result: GenerationResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.marketing_brief.key_benefits, vec!["Fast"]);
        assert_eq!(result.ad_image_prompts.prompts.len(), 2);
        assert!(result.generated_images.is_none());
        assert!(result.creative_assets().is_none());
    }

    #[test]
    fn test_null_and_empty_generated_images_have_no_assets() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["generated_images"] = serde_json::Value::Null;
        let result: GenerationResult = serde_json::from_value(value.clone()).unwrap();
        assert!(result.creative_assets().is_none());

        value["generated_images"] = serde_json::json!([]);
        let result: GenerationResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.generated_images, Some(vec![]));
        assert!(result.creative_assets().is_none());
    }

    #[test]
    fn test_generated_images_accept_optional_prompt() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["generated_images"] = serde_json::json!([
            { "angle_name": "Speed", "image_url": "images/speed.png" },
            { "angle_name": "Trust", "image_url": "images/trust.png", "prompt": "A smiling coyote" }
        ]);
        let result: GenerationResult = serde_json::from_value(value).unwrap();
        let assets = result.creative_assets().unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].prompt, None);
        assert_eq!(assets[1].prompt.as_deref(), Some("A smiling coyote"));
    }

    #[test]
    fn test_envelope_defaults_success_to_false() {
        let envelope: GenerationEnvelope = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("boom"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_request_from_form_trims_blank_url() {
        let request = GenerationRequest::from_form("   ", None);
        assert!(request.website_url.is_none());

        let request = GenerationRequest::from_form(" https://acme.example ", None);
        assert_eq!(request.website_url.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn test_presentation_file_extension_matching() {
        let accepted = vec!["pptx".to_string()];
        assert!(PresentationFile::new("/decks/Pitch.PPTX").has_accepted_extension(&accepted));
        assert!(PresentationFile::new("deck.pptx").has_accepted_extension(&[".pptx".into()]));
        assert!(!PresentationFile::new("/decks/notes.txt").has_accepted_extension(&accepted));
        assert!(!PresentationFile::new("/decks/README").has_accepted_extension(&accepted));
    }

    #[test]
    fn test_presentation_file_name_and_mime() {
        let file = PresentationFile::new("/tmp/q3/launch.pptx");
        assert_eq!(file.file_name, "launch.pptx");
        assert_eq!(file.mime_type(), PPTX_MIME);
        assert_eq!(
            PresentationFile::new("x.bin").mime_type(),
            "application/octet-stream"
        );
    }
}
