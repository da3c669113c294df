//! Submission screen: URL field, presentation field, submit control and the
//! inline error message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use adforge_app::{SubmissionField, SubmissionState};

use crate::layout::centered_column;
use crate::theme::{icons::IconSet, styles};

const FORM_WIDTH: u16 = 72;

pub struct SubmissionForm<'a> {
    state: &'a SubmissionState,
    accepted_extensions: &'a [String],
    icons: IconSet,
}

impl<'a> SubmissionForm<'a> {
    pub fn new(state: &'a SubmissionState, accepted_extensions: &'a [String], icons: IconSet) -> Self {
        Self {
            state,
            accepted_extensions,
            icons,
        }
    }

    fn file_label(&self) -> String {
        let extensions = self
            .accepted_extensions
            .iter()
            .map(|e| format!(".{}", e.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} Presentation ({})", self.icons.upload(), extensions)
    }

    fn render_field(&self, label: &str, value: &str, field: SubmissionField, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == field;
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", label),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        let mut spans = vec![Span::styled(value.to_string(), styles::text_primary())];
        if focused {
            spans.push(Span::styled("█", styles::accent()));
        }
        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }

    fn render_submit(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == SubmissionField::Submit;
        let line = if self.state.loading {
            Line::from(Span::styled(
                format!(
                    " {} Generating assets… ",
                    self.icons.spinner(self.state.spinner_frame())
                ),
                styles::button_disabled(),
            ))
        } else {
            Line::from(Span::styled(
                " Generate Assets ",
                styles::button(focused),
            ))
        };
        Paragraph::new(line).render(area, buf);
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer) {
        let Some(message) = &self.state.error_message else {
            return;
        };
        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.alert(), styles::status_red()),
            Span::raw(" "),
            Span::styled(message.as_str(), styles::status_red()),
        ]))
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

impl Widget for SubmissionForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(area, FORM_WIDTH);
        let [intro, url, file, submit, error] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(Line::from(Span::styled(
            "Point at a website, a pitch deck, or both.",
            styles::text_muted(),
        )))
        .render(intro, buf);

        let url_label = format!("{} Website URL", self.icons.globe());
        self.render_field(&url_label, &self.state.url, SubmissionField::Url, url, buf);
        let file_label = self.file_label();
        self.render_field(
            &file_label,
            &self.state.file_path,
            SubmissionField::File,
            file,
            buf,
        );
        self.render_submit(submit, buf);
        self.render_error(error, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use adforge_app::config::IconMode;
    use std::path::PathBuf;

    fn pptx() -> Vec<String> {
        vec!["pptx".to_string()]
    }

    fn render(state: &SubmissionState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let extensions = pptx();
        let form = SubmissionForm::new(state, &extensions, IconSet::new(IconMode::Unicode));
        term.render_widget(form, term.area());
        term
    }

    #[test]
    fn test_renders_fields_and_submit() {
        let state = SubmissionState::with_prefill(
            Some("https://acme.example".into()),
            Some(PathBuf::from("deck.pptx")),
        );
        let term = render(&state);

        assert!(term.buffer_contains("Website URL"));
        assert!(term.buffer_contains("https://acme.example"));
        assert!(term.buffer_contains("Presentation (.pptx)"));
        assert!(term.buffer_contains("deck.pptx"));
        assert!(term.buffer_contains("Generate Assets"));
    }

    #[test]
    fn test_loading_replaces_submit_label() {
        let mut state = SubmissionState::new();
        state.begin_submit(1, &pptx()).unwrap();
        let term = render(&state);

        assert!(term.buffer_contains("Generating assets"));
        assert!(!term.buffer_contains("Generate Assets"));
    }

    #[test]
    fn test_error_message_is_shown() {
        let mut state = SubmissionState::new();
        state.begin_submit(1, &pptx()).unwrap();
        state.finish_failure("Failed to generate assets".into());
        let term = render(&state);

        assert!(term.buffer_contains("Failed to generate assets"));
        assert!(term.buffer_contains("Generate Assets"));
    }

    #[test]
    fn test_no_error_line_when_idle() {
        let term = render(&SubmissionState::new());
        assert!(!term.buffer_contains("⚠"));
    }
}
