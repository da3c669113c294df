//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use adforge_app::config::IconMode;
use adforge_app::SectionIcon;

/// Spinner frames shown on the submit control while loading
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "\u{21af}",   // ↯
        }
    }

    pub fn mail(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e0}", // nf-fa-envelope
            IconMode::Unicode => "\u{2709}",   // ✉
        }
    }

    pub fn file_text(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15c}", // nf-fa-file_text
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "\u{2191}",   // ↑
        }
    }

    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ac}", // nf-fa-globe
            IconMode::Unicode => "\u{25ce}",   // ◎
        }
    }

    /// Glyph for a result section header
    pub fn section(&self, icon: SectionIcon) -> &'static str {
        match icon {
            SectionIcon::Zap => self.zap(),
            SectionIcon::Mail => self.mail(),
            SectionIcon::FileText => self.file_text(),
            SectionIcon::Image => self.image(),
        }
    }

    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER[frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_section_icons_are_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        let glyphs = [
            icons.section(SectionIcon::Zap),
            icons.section(SectionIcon::Mail),
            icons.section(SectionIcon::FileText),
            icons.section(SectionIcon::Image),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.zap(), nerd.zap());
        assert_ne!(unicode.image(), nerd.image());
    }

    #[test]
    fn test_spinner_wraps() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.spinner(0), icons.spinner(SPINNER.len()));
    }
}
