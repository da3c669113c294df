//! Main update function - handles state transitions (TEA pattern)

use adforge_core::prelude::*;

use crate::message::Message;
use crate::navigation::{Handoff, Route};
use crate::state::{AppPhase, AppState, Screen};
use crate::submission::SubmitBlocked;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by PageUp/PageDown on the results screen
const PAGE_SCROLL: i32 = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if let Some(form) = state.submission_mut() {
                form.tick();
            }
            UpdateResult::none()
        }

        Message::Navigate { route, handoff } => {
            state.navigate(route, handoff);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => with_form(state, |form| form.input_char(c)),
        Message::Backspace => with_form(state, |form| form.backspace()),
        Message::ClearField => with_form(state, |form| form.clear_field()),
        Message::FocusNext => with_form(state, |form| form.focus_next()),
        Message::FocusPrev => with_form(state, |form| form.focus_prev()),

        Message::Submit => handle_submit(state),

        Message::GenerationCompleted { request_id, result } => {
            match state.submission_mut() {
                Some(form) if form.is_awaiting(request_id) => {
                    form.finish_success();
                    info!("Generation {} completed", request_id);
                    UpdateResult::message(Message::Navigate {
                        route: Route::Results,
                        handoff: Handoff::Bundle(result),
                    })
                }
                _ => {
                    debug!("Ignoring stale completion for request {}", request_id);
                    UpdateResult::none()
                }
            }
        }

        Message::GenerationFailed { request_id, error } => {
            match state.submission_mut() {
                Some(form) if form.is_awaiting(request_id) => {
                    warn!("Generation {} failed: {}", request_id, error);
                    form.finish_failure(error.user_message());
                }
                _ => {
                    debug!("Ignoring stale failure for request {}", request_id);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Results Messages
        // ─────────────────────────────────────────────────────────
        Message::BackToSubmission => {
            state.navigate(Route::Submission, Handoff::Missing);
            UpdateResult::none()
        }

        Message::FocusNextSection => with_results(state, |r| r.focus_next()),
        Message::FocusPrevSection => with_results(state, |r| r.focus_prev()),
        Message::ToggleFocusedSection => with_results(state, |r| r.toggle_focused()),
        Message::ToggleSection(index) => with_results(state, |r| {
            r.toggle(index);
        }),
        Message::ScrollUp => with_results(state, |r| r.scroll_by(-1)),
        Message::ScrollDown => with_results(state, |r| r.scroll_by(1)),
        Message::PageUp => with_results(state, |r| r.scroll_by(-PAGE_SCROLL)),
        Message::PageDown => with_results(state, |r| r.scroll_by(PAGE_SCROLL)),
        Message::ScrollToTop => with_results(state, |r| r.scroll_to_top()),
        Message::ScrollToBottom => with_results(state, |r| r.scroll_to_bottom()),
        Message::SelectNextAsset => with_results(state, |r| r.select_next_asset()),
        Message::SelectPrevAsset => with_results(state, |r| r.select_prev_asset()),

        Message::OpenSelectedAsset => {
            let Some(image) = state.results().and_then(|r| r.selected_asset()) else {
                return UpdateResult::none();
            };
            let url = state.endpoints.asset_url(&image.image_url);
            debug!("Opening creative asset {}", url);
            UpdateResult::action(UpdateAction::OpenBrowser {
                url,
                browser: state.settings.behavior.browser.clone(),
            })
        }
    }
}

fn with_form(
    state: &mut AppState,
    f: impl FnOnce(&mut crate::submission::SubmissionState),
) -> UpdateResult {
    if let Some(form) = state.submission_mut() {
        f(form);
    }
    UpdateResult::none()
}

fn with_results(
    state: &mut AppState,
    f: impl FnOnce(&mut crate::results::ResultsState),
) -> UpdateResult {
    if let Some(results) = state.results_mut() {
        f(results);
    }
    UpdateResult::none()
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.submission() {
        Some(form) if form.can_submit() => {}
        _ => return UpdateResult::none(),
    }

    let request_id = state.allocate_request_id();
    let accepted = &state.settings.upload.accepted_extensions;
    let Screen::Submission(form) = &mut state.screen else {
        return UpdateResult::none();
    };

    match form.begin_submit(request_id, accepted) {
        Ok(request) => {
            info!(
                "Submitting generation {} (url: {}, file: {})",
                request_id,
                request.website_url.is_some(),
                request.presentation.is_some()
            );
            UpdateResult::action(UpdateAction::Generate {
                request_id,
                request,
            })
        }
        Err(SubmitBlocked::Loading) => UpdateResult::none(),
        Err(SubmitBlocked::UnsupportedFile { file_name }) => {
            warn!("Refusing to upload {}", file_name);
            UpdateResult::none()
        }
    }
}
