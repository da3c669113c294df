//! Submission screen state
//!
//! Owns the form fields, the loading flag and the inline error message.
//! A fresh value is built every time the screen is mounted; nothing here
//! outlives the screen.

use std::path::PathBuf;

use adforge_core::{GenerationRequest, PresentationFile};

/// Identifier of one submit attempt. Completions carrying any other id are
/// ignored.
pub type RequestId = u64;

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionField {
    #[default]
    Url,
    File,
    Submit,
}

impl SubmissionField {
    pub fn next(self) -> Self {
        match self {
            SubmissionField::Url => SubmissionField::File,
            SubmissionField::File => SubmissionField::Submit,
            SubmissionField::Submit => SubmissionField::Url,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SubmissionField::Url => SubmissionField::Submit,
            SubmissionField::File => SubmissionField::Url,
            SubmissionField::Submit => SubmissionField::File,
        }
    }
}

/// Why a submit did not start a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already running; the submit control is disabled
    Loading,
    /// The selected file is not an accepted presentation type
    UnsupportedFile { file_name: String },
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// Website URL, free text
    pub url: String,
    /// Path of the presentation to upload, free text until submit
    pub file_path: String,
    pub focus: SubmissionField,
    pub loading: bool,
    pub error_message: Option<String>,
    in_flight: Option<RequestId>,
    spinner_frame: usize,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial values supplied from the command line
    pub fn with_prefill(url: Option<String>, file: Option<PathBuf>) -> Self {
        Self {
            url: url.unwrap_or_default(),
            file_path: file
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Whether the submit control accepts activation
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            SubmissionField::Url => Some(&mut self.url),
            SubmissionField::File => Some(&mut self.file_path),
            SubmissionField::Submit => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.clear();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    // ─────────────────────────────────────────────────────────
    // Request lifecycle
    // ─────────────────────────────────────────────────────────

    /// The selected presentation, if the file field is not blank.
    /// A leading `~/` is expanded to the home directory.
    pub fn presentation(&self) -> Option<PresentationFile> {
        let raw = self.file_path.trim();
        if raw.is_empty() {
            return None;
        }
        let path = match (raw.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(raw),
        };
        Some(PresentationFile::new(path))
    }

    /// Start a submit attempt.
    ///
    /// On success the state is `loading` with `id` in flight and the request
    /// to send is returned. Nothing changes while already loading. A file
    /// with an unaccepted extension sets the error message instead.
    pub fn begin_submit(
        &mut self,
        id: RequestId,
        accepted_extensions: &[String],
    ) -> Result<GenerationRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Loading);
        }

        let presentation = self.presentation();
        if let Some(file) = &presentation {
            if !file.has_accepted_extension(accepted_extensions) {
                self.error_message = Some(format!(
                    "{} is not a supported presentation (expected {})",
                    file.file_name,
                    describe_extensions(accepted_extensions)
                ));
                return Err(SubmitBlocked::UnsupportedFile {
                    file_name: file.file_name.clone(),
                });
            }
        }

        self.loading = true;
        self.error_message = None;
        self.in_flight = Some(id);
        self.spinner_frame = 0;
        Ok(GenerationRequest::from_form(&self.url, presentation))
    }

    /// Whether `id` is the attempt this screen is waiting for
    pub fn is_awaiting(&self, id: RequestId) -> bool {
        self.loading && self.in_flight == Some(id)
    }

    /// Clear the loading state after a successful attempt
    pub fn finish_success(&mut self) {
        self.loading = false;
        self.in_flight = None;
    }

    /// Clear the loading state and show `message`
    pub fn finish_failure(&mut self, message: String) {
        self.loading = false;
        self.in_flight = None;
        self.error_message = Some(message);
    }

    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

fn describe_extensions(accepted: &[String]) -> String {
    if accepted.is_empty() {
        return "no file types configured".to_string();
    }
    accepted
        .iter()
        .map(|e| format!(".{}", e.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pptx() -> Vec<String> {
        vec!["pptx".to_string()]
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = SubmissionState::new();
        assert!(state.url.is_empty());
        assert!(state.file_path.is_empty());
        assert!(!state.loading);
        assert!(state.error_message.is_none());
        assert_eq!(state.focus, SubmissionField::Url);
        assert!(state.can_submit());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = SubmissionState::new();
        for c in "acme".chars() {
            state.input_char(c);
        }
        state.focus_next();
        for c in "d.pptx".chars() {
            state.input_char(c);
        }
        state.backspace();
        state.focus_next();
        state.input_char('x'); // submit button takes no text

        assert_eq!(state.url, "acme");
        assert_eq!(state.file_path, "d.ppt");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut state = SubmissionState::new();
        state.focus_prev();
        assert_eq!(state.focus, SubmissionField::Submit);
        state.focus_next();
        assert_eq!(state.focus, SubmissionField::Url);
    }

    #[test]
    fn test_clear_field_only_clears_focused() {
        let mut state = SubmissionState::with_prefill(
            Some("https://acme.example".into()),
            Some(PathBuf::from("deck.pptx")),
        );
        state.clear_field();
        assert!(state.url.is_empty());
        assert_eq!(state.file_path, "deck.pptx");
    }

    #[test]
    fn test_begin_submit_with_url_only() {
        let mut state = SubmissionState::with_prefill(Some("https://acme.example".into()), None);
        let request = state.begin_submit(1, &pptx()).unwrap();

        assert_eq!(request.website_url.as_deref(), Some("https://acme.example"));
        assert!(request.presentation.is_none());
        assert!(state.loading);
        assert!(state.is_awaiting(1));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut state = SubmissionState::new();
        state.error_message = Some("old".into());
        state.begin_submit(3, &pptx()).unwrap();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_begin_submit_blocked_while_loading() {
        let mut state = SubmissionState::new();
        state.begin_submit(1, &pptx()).unwrap();
        assert_eq!(state.begin_submit(2, &pptx()), Err(SubmitBlocked::Loading));
        assert!(state.is_awaiting(1));
        assert!(!state.is_awaiting(2));
    }

    #[test]
    fn test_begin_submit_rejects_unaccepted_extension() {
        let mut state = SubmissionState::with_prefill(None, Some(PathBuf::from("notes.docx")));
        let result = state.begin_submit(1, &pptx());

        assert_eq!(
            result,
            Err(SubmitBlocked::UnsupportedFile {
                file_name: "notes.docx".into()
            })
        );
        assert!(!state.loading);
        let message = state.error_message.unwrap();
        assert!(message.contains("notes.docx"));
        assert!(message.contains(".pptx"));
    }

    #[test]
    fn test_begin_submit_with_file() {
        let mut state = SubmissionState::with_prefill(None, Some(PathBuf::from("/decks/Q3.pptx")));
        let request = state.begin_submit(7, &pptx()).unwrap();
        let file = request.presentation.unwrap();
        assert_eq!(file.file_name, "Q3.pptx");
        assert!(request.website_url.is_none());
    }

    #[test]
    fn test_finish_failure_sets_message_and_clears_loading() {
        let mut state = SubmissionState::new();
        state.begin_submit(1, &pptx()).unwrap();
        state.finish_failure("Failed to generate assets".into());

        assert!(!state.loading);
        assert!(state.in_flight().is_none());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to generate assets")
        );
        assert!(state.can_submit());
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = SubmissionState::new();
        state.tick();
        assert_eq!(state.spinner_frame(), 0);
        state.begin_submit(1, &pptx()).unwrap();
        state.tick();
        state.tick();
        assert_eq!(state.spinner_frame(), 2);
    }

    #[test]
    fn test_describe_extensions() {
        assert_eq!(
            describe_extensions(&["pptx".into(), ".odp".into()]),
            ".pptx, .odp"
        );
    }
}
