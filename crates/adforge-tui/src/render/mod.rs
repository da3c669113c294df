//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use adforge_app::{AppState, Screen};

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only the results screen writes back, to record its content size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.route(), state.endpoints.origin().as_str(), icons),
        areas.header,
    );

    match &mut state.screen {
        Screen::Submission(form) => frame.render_widget(
            widgets::SubmissionForm::new(form, &state.settings.upload.accepted_extensions, icons),
            areas.body,
        ),
        Screen::Results(results) => frame.render_stateful_widget(
            widgets::ResultsView::new(&state.endpoints, icons),
            areas.body,
            results.as_mut(),
        ),
    }

    frame.render_widget(widgets::KeyHints::new(state.route()), areas.footer);
}
