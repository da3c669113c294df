//! Header bar widget
//!
//! App title, the current screen and the backend origin.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use adforge_app::Route;

use crate::theme::{icons::IconSet, styles};

pub struct MainHeader<'a> {
    route: Route,
    origin: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(route: Route, origin: &'a str, icons: IconSet) -> Self {
        Self {
            route,
            origin,
            icons,
        }
    }
}

fn route_label(route: Route) -> &'static str {
    match route {
        Route::Submission => "New Campaign",
        Route::Results => "Results",
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(self.icons.terminal(), styles::accent()),
            Span::raw(" "),
            Span::styled("adforge", styles::accent_bold()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(route_label(self.route), styles::text_bright_bold()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.origin, styles::text_secondary()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// One-line key hints for the mounted screen
pub struct KeyHints {
    route: Route,
}

impl KeyHints {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.route {
            Route::Submission => &[
                ("Tab", "next field"),
                ("Enter", "generate"),
                ("Ctrl+U", "clear"),
                ("Esc", "quit"),
            ],
            Route::Results => &[
                ("↑/↓", "section"),
                ("Enter", "expand"),
                ("1-4", "toggle"),
                ("PgUp/PgDn", "scroll"),
                ("Home/End", "jump"),
                ("b", "new campaign"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
