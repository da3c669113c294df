//! Results screen: the generated bundle as a scrollable stack of collapsible
//! sections.
//!
//! Pure presentation of `ResultsState`. Asset URLs are resolved against the
//! backend's static root; nothing is fetched while rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use adforge_app::{Endpoints, ResultSection, ResultsState, SectionKind};
use adforge_core::{EmailDraft, GeneratedImage, ImagePrompt, MarketingBrief};

use crate::theme::{icons::IconSet, styles};

use super::Disclosure;

/// Renders a `ResultsState` and records the content size back into it, so
/// scrolling stops at the end of the content.
pub struct ResultsView<'a> {
    endpoints: &'a Endpoints,
    icons: IconSet,
}

impl<'a> ResultsView<'a> {
    pub fn new(endpoints: &'a Endpoints, icons: IconSet) -> Self {
        Self { endpoints, icons }
    }

    fn section_content(&self, state: &ResultsState, kind: SectionKind) -> Text<'static> {
        let bundle = state.bundle();
        match kind {
            SectionKind::StrategyBrief => brief_text(&bundle.marketing_brief),
            SectionKind::EmailDraft => email_text(&bundle.email),
            SectionKind::ImagePrompts => prompts_text(&bundle.ad_image_prompts.prompts),
            SectionKind::CreativeAssets => self.assets_text(state),
        }
    }

    fn assets_text(&self, state: &ResultsState) -> Text<'static> {
        let images = state.bundle().creative_assets().unwrap_or_default();
        let selected = state.selected_asset_index();
        let mut lines = Vec::with_capacity(images.len() * 2 + 1);

        for (index, image) in images.iter().enumerate() {
            lines.extend(asset_lines(
                image,
                self.endpoints.asset_url(&image.image_url),
                index == selected,
            ));
        }
        lines.push(Line::from(Span::styled(
            "←/→ select · o open in browser",
            styles::text_muted(),
        )));
        Text::from(lines)
    }

    fn section_lines(
        &self,
        state: &ResultsState,
        index: usize,
        section: &ResultSection,
    ) -> Vec<Line<'static>> {
        let kind = section.kind;
        Disclosure::new(kind.title(), section.disclosure.is_open())
            .icon(self.icons.section(kind.icon()))
            .focused(index == state.focused())
            .content(self.section_content(state, kind))
            .into_lines()
    }

    fn lines(&self, state: &ResultsState) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, section) in state.sections().iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.extend(self.section_lines(state, index, section));
        }
        lines
    }
}

impl StatefulWidget for ResultsView<'_> {
    type State = ResultsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ResultsState) {
        let block = styles::glass_block(true).title(Span::styled(
            format!(
                " Generated Assets · {} ",
                state.received_at().format("%H:%M:%S")
            ),
            styles::accent_bold(),
        ));
        let inner = block.inner(area);

        let lines = self.lines(state);
        let total: usize = lines
            .iter()
            .map(|line| wrapped_rows(line, inner.width))
            .sum();
        state.update_content_size(u16::try_from(total).unwrap_or(u16::MAX), inner.height);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0))
            .render(area, buf);
    }
}

/// Rows a line occupies once wrapped to `width` columns
fn wrapped_rows(line: &Line<'_>, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    line.width().div_ceil(usize::from(width)).max(1)
}

fn labelled(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, styles::text_secondary()),
        Span::styled(value.to_string(), styles::text_primary()),
    ])
}

fn brief_text(brief: &MarketingBrief) -> Text<'static> {
    let mut lines = vec![
        labelled("Product / Service: ", &brief.product_or_service),
        labelled("Target Audience:   ", &brief.target_audience),
        labelled("Value Proposition: ", &brief.value_proposition),
        labelled("Tone of Voice:     ", &brief.tone_of_voice),
        Line::from(Span::styled("Key Benefits:", styles::text_secondary())),
    ];
    lines.extend(brief.key_benefits.iter().map(|benefit| {
        Line::from(vec![
            Span::styled("  • ", styles::accent()),
            Span::styled(benefit.clone(), styles::text_primary()),
        ])
    }));
    Text::from(lines)
}

fn email_text(email: &EmailDraft) -> Text<'static> {
    let mut lines = vec![
        labelled("Subject: ", &email.subject),
        Line::default(),
    ];
    lines.extend(
        email
            .body
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary()))),
    );
    Text::from(lines)
}

fn prompts_text(prompts: &[ImagePrompt]) -> Text<'static> {
    let mut lines = Vec::with_capacity(prompts.len() * 2);
    for prompt in prompts {
        lines.push(Line::from(Span::styled(
            prompt.angle_name.clone(),
            styles::accent_bold(),
        )));
        lines.push(Line::from(Span::styled(
            prompt.prompt.clone(),
            styles::text_primary(),
        )));
    }
    Text::from(lines)
}

fn asset_lines(image: &GeneratedImage, url: String, selected: bool) -> Vec<Line<'static>> {
    let name_style = if selected {
        styles::focused_selected()
    } else {
        styles::accent_bold()
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, styles::accent()),
            Span::styled(image.angle_name.clone(), name_style),
        ]),
        Line::from(Span::styled(format!("  {}", url), styles::status_green())),
    ];
    if let Some(prompt) = &image.prompt {
        lines.push(Line::from(Span::styled(
            format!("  {}", prompt),
            styles::text_muted(),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use adforge_app::config::IconMode;
    use adforge_client::test_utils::{sample_result, sample_result_with_images};
    use std::sync::Arc;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:5000").unwrap()
    }

    fn render(state: &mut ResultsState, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, height);
        let endpoints = endpoints();
        let view = ResultsView::new(&endpoints, IconSet::new(IconMode::Unicode));
        term.render_stateful_widget(view, term.area(), state);
        term
    }

    #[test]
    fn test_url_only_bundle_renders_three_sections() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        let term = render(&mut state, 30);

        assert!(term.buffer_contains("Strategy Brief"));
        assert!(term.buffer_contains("Email Draft"));
        assert!(term.buffer_contains("Image Prompts"));
        assert!(!term.buffer_contains("Creative Assets"));
    }

    #[test]
    fn test_brief_open_by_default_with_benefits() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        let term = render(&mut state, 30);

        assert!(term.buffer_contains("Acme Rockets"));
        assert!(term.buffer_contains("• Reaches 300 mph"));
        // Closed sections only show their header
        assert!(!term.buffer_contains("Meet Acme Rockets"));
        assert!(!term.buffer_contains("Reliability"));
    }

    #[test]
    fn test_opening_email_shows_subject() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        state.toggle(1);
        let term = render(&mut state, 40);

        assert!(term.buffer_contains("Subject: Meet Acme Rockets"));
    }

    #[test]
    fn test_prompts_section_lists_each_angle() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        state.toggle(0);
        state.toggle(2);
        let term = render(&mut state, 30);

        assert!(term.buffer_contains("Speed"));
        assert!(term.buffer_contains("Reliability"));
    }

    #[test]
    fn test_creative_assets_resolve_against_static_root() {
        let mut state = ResultsState::new(Arc::new(sample_result_with_images(&[
            ("Speed", "speed.png"),
            ("Trust", "trust.png"),
        ])));
        state.toggle(0);
        state.toggle(3);
        let term = render(&mut state, 30);

        assert!(term.buffer_contains("Creative Assets"));
        assert!(term.buffer_contains("http://localhost:5000/static/speed.png"));
        assert!(term.buffer_contains("http://localhost:5000/static/trust.png"));
        assert!(term.buffer_contains("▸ Speed"));
    }

    #[test]
    fn test_chevrons_reflect_each_section() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        let term = render(&mut state, 30);

        let brief = term.find_line("Strategy Brief").unwrap();
        let email = term.find_line("Email Draft").unwrap();
        assert!(term.line_contains(brief, "▲"));
        assert!(term.line_contains(email, "▼"));
    }

    #[test]
    fn test_scroll_moves_content_up() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        render(&mut state, 8);
        state.scroll_by(1);
        let term = render(&mut state, 8);

        // The first line of content (the brief header) is scrolled away
        assert!(!term.buffer_contains("Strategy Brief"));
        assert!(term.buffer_contains("Product / Service"));
    }

    #[test]
    fn test_render_records_content_size() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        render(&mut state, 8);

        // Brief open: header, 5 fields, 1 benefit; then 2 closed headers with spacers
        assert_eq!(state.max_scroll(), 11 - 6);
        for _ in 0..10 {
            state.scroll_by(10);
        }
        let term = render(&mut state, 8);
        assert_eq!(state.scroll, 5);
        assert!(term.buffer_contains("Image Prompts"));
    }

    #[test]
    fn test_collapsing_pulls_scroll_back_into_content() {
        let mut state = ResultsState::new(Arc::new(sample_result()));
        render(&mut state, 8);
        state.scroll_by(5);
        assert_eq!(state.scroll, 5);

        // Closing the brief leaves five rows, which fit without scrolling
        state.toggle(0);
        let term = render(&mut state, 8);
        assert_eq!(state.scroll, 0);
        assert!(term.buffer_contains("Strategy Brief"));
        assert!(term.buffer_contains("Image Prompts"));
    }
}
