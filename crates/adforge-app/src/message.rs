//! Message types for the application (TEA pattern)

use std::sync::Arc;

use adforge_core::{GenerationResult, SubmitError};

use crate::input_key::InputKey;
use crate::navigation::{Handoff, Route};
use crate::submission::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit (Esc/Ctrl+C, `q` on results, signal handler)
    Quit,

    /// Switch screens, carrying the typed hand-off for the destination
    Navigate { route: Route, handoff: Handoff },

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the focused field
    InputChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Move focus to the next form element
    FocusNext,
    /// Move focus to the previous form element
    FocusPrev,
    /// Activate the submit control
    Submit,

    /// The backend answered with a valid bundle
    GenerationCompleted {
        request_id: RequestId,
        result: Arc<GenerationResult>,
    },

    /// The attempt failed (network, rejection or malformed response)
    GenerationFailed {
        request_id: RequestId,
        error: SubmitError,
    },

    // ─────────────────────────────────────────────────────────
    // Results Messages
    // ─────────────────────────────────────────────────────────
    /// Return to a freshly mounted Submission screen
    BackToSubmission,
    FocusNextSection,
    FocusPrevSection,
    ToggleFocusedSection,
    /// Toggle the section at this display index
    ToggleSection(usize),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    SelectNextAsset,
    SelectPrevAsset,
    /// Open the selected creative asset in the browser
    OpenSelectedAsset,
}
