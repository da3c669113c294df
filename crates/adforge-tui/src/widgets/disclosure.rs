//! Collapsible section widget
//!
//! A header line (icon, title, chevron) followed by arbitrary content that is
//! only drawn while the section is open. The widget holds no state of its own;
//! the open flag comes from the caller.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const CHEVRON_OPEN: &str = "▲";
const CHEVRON_CLOSED: &str = "▼";

pub struct Disclosure<'a> {
    title: &'a str,
    icon: Option<&'a str>,
    open: bool,
    focused: bool,
    content: Text<'a>,
}

impl<'a> Disclosure<'a> {
    pub fn new(title: &'a str, open: bool) -> Self {
        Self {
            title,
            icon: None,
            open,
            focused: false,
            content: Text::default(),
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn content(mut self, content: impl Into<Text<'a>>) -> Self {
        self.content = content.into();
        self
    }

    fn header(&self) -> Line<'a> {
        let title_style = if self.focused {
            styles::focused_selected()
        } else {
            styles::text_bright_bold()
        };

        let mut spans = vec![Span::styled(
            if self.focused { "› " } else { "  " },
            styles::accent(),
        )];
        if let Some(icon) = self.icon {
            spans.push(Span::styled(icon, styles::accent()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.title, title_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            if self.open {
                CHEVRON_OPEN
            } else {
                CHEVRON_CLOSED
            },
            styles::text_muted(),
        ));
        Line::from(spans)
    }

    /// Header plus, when open, the indented content lines
    pub fn into_lines(self) -> Vec<Line<'a>> {
        let mut lines = vec![self.header()];
        if self.open {
            lines.extend(self.content.lines.into_iter().map(indent));
        }
        lines
    }
}

fn indent(line: Line<'_>) -> Line<'_> {
    let mut spans = vec![Span::styled("    ", Style::default())];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

impl Widget for Disclosure<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.into_lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
