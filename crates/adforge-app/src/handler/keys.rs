//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};
use crate::submission::{SubmissionField, SubmissionState};

/// Convert key events to messages based on the mounted screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match &state.screen {
        Screen::Submission(form) => handle_key_submission(form, key),
        Screen::Results(_) => handle_key_results(key),
    }
}

/// Handle key events on the submission form
fn handle_key_submission(form: &SubmissionState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),

        InputKey::Enter => Some(Message::Submit),
        // Space presses the focused button
        InputKey::Char(' ') if form.focus == SubmissionField::Submit => Some(Message::Submit),

        InputKey::Backspace => Some(Message::Backspace),
        InputKey::CharCtrl('u') => Some(Message::ClearField),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        _ => None,
    }
}

/// Handle key events on the results screen
fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('b') => Some(Message::BackToSubmission),

        // Section focus
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::FocusNextSection),
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => Some(Message::FocusPrevSection),

        // Disclosure
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFocusedSection),
        InputKey::Char(c @ '1'..='4') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            Some(Message::ToggleSection(index))
        }

        // Scrolling
        InputKey::Char('K') => Some(Message::ScrollUp),
        InputKey::Char('J') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // Creative assets
        InputKey::Left | InputKey::Char('h') => Some(Message::SelectPrevAsset),
        InputKey::Right | InputKey::Char('l') => Some(Message::SelectNextAsset),
        InputKey::Char('o') => Some(Message::OpenSelectedAsset),

        _ => None,
    }
}
