//! Results screen state
//!
//! Built from a hand-off, never from a fetch. The bundle is shared and read
//! only; the only mutable state is which sections are open, which one has
//! focus, the scroll offset and the selected creative asset.

use std::sync::Arc;

use chrono::{DateTime, Local};

use adforge_core::{GeneratedImage, GenerationResult};

use crate::disclosure::Disclosure;
use crate::navigation::Handoff;

/// Icon identifiers for section headers; the TUI maps them to glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIcon {
    Zap,
    Mail,
    FileText,
    Image,
}

/// The four result sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    StrategyBrief,
    EmailDraft,
    ImagePrompts,
    CreativeAssets,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::StrategyBrief => "Strategy Brief",
            SectionKind::EmailDraft => "Email Draft",
            SectionKind::ImagePrompts => "Image Prompts",
            SectionKind::CreativeAssets => "Creative Assets",
        }
    }

    pub fn icon(self) -> SectionIcon {
        match self {
            SectionKind::StrategyBrief => SectionIcon::Zap,
            SectionKind::EmailDraft => SectionIcon::Mail,
            SectionKind::ImagePrompts => SectionIcon::FileText,
            SectionKind::CreativeAssets => SectionIcon::Image,
        }
    }

    /// Only the brief starts expanded
    pub fn default_open(self) -> bool {
        matches!(self, SectionKind::StrategyBrief)
    }
}

/// One composed section and its own disclosure flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSection {
    pub kind: SectionKind,
    pub disclosure: Disclosure,
}

impl ResultSection {
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            disclosure: Disclosure::new(kind.default_open()),
        }
    }
}

/// Outcome of entering the Results screen
#[derive(Debug, Clone)]
pub enum ResultsEntry {
    Ready(Box<ResultsState>),
    /// No bundle was handed over; go back to the Submission screen
    Redirect,
}

#[derive(Debug, Clone)]
pub struct ResultsState {
    bundle: Arc<GenerationResult>,
    sections: Vec<ResultSection>,
    focused: usize,
    pub scroll: u16,
    /// Rendered rows of the section stack, as of the last draw
    content_height: u16,
    /// Rows available to it, as of the last draw
    viewport_height: u16,
    selected_asset: usize,
    received_at: DateTime<Local>,
}

impl ResultsState {
    /// Guarded entry point: a missing hand-off redirects instead of rendering
    pub fn enter(handoff: Handoff) -> ResultsEntry {
        match handoff {
            Handoff::Bundle(bundle) => ResultsEntry::Ready(Box::new(Self::new(bundle))),
            Handoff::Missing => ResultsEntry::Redirect,
        }
    }

    /// Compose the sections for `bundle`. Creative Assets is included only
    /// when the bundle has at least one generated image.
    pub fn new(bundle: Arc<GenerationResult>) -> Self {
        let mut sections = vec![
            ResultSection::new(SectionKind::StrategyBrief),
            ResultSection::new(SectionKind::EmailDraft),
            ResultSection::new(SectionKind::ImagePrompts),
        ];
        if bundle.creative_assets().is_some() {
            sections.push(ResultSection::new(SectionKind::CreativeAssets));
        }

        Self {
            bundle,
            sections,
            focused: 0,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            selected_asset: 0,
            received_at: Local::now(),
        }
    }

    pub fn bundle(&self) -> &GenerationResult {
        &self.bundle
    }

    /// The shared bundle handle (same allocation that was handed over)
    pub fn bundle_arc(&self) -> &Arc<GenerationResult> {
        &self.bundle
    }

    pub fn sections(&self) -> &[ResultSection] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ResultSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_kind(&self) -> SectionKind {
        self.sections[self.focused].kind
    }

    pub fn received_at(&self) -> DateTime<Local> {
        self.received_at
    }

    // ─────────────────────────────────────────────────────────
    // Disclosure
    // ─────────────────────────────────────────────────────────

    /// Toggle the section at `index`. Returns false if there is none.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.sections.get_mut(index) {
            Some(section) => {
                section.disclosure.toggle();
                true
            }
            None => false,
        }
    }

    pub fn toggle_focused(&mut self) {
        self.toggle(self.focused);
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.sections.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.sections.len() - 1);
    }

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────

    /// Furthest offset that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(self.max_scroll())) as u16;
    }

    /// Record the size of the last draw. Collapsing a section can shrink the
    /// content, so the offset is pulled back inside it.
    pub fn update_content_size(&mut self, total: u16, visible: u16) {
        self.content_height = total;
        self.viewport_height = visible;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    // ─────────────────────────────────────────────────────────
    // Creative assets
    // ─────────────────────────────────────────────────────────

    pub fn selected_asset_index(&self) -> usize {
        self.selected_asset
    }

    pub fn selected_asset(&self) -> Option<&GeneratedImage> {
        self.bundle
            .creative_assets()
            .and_then(|images| images.get(self.selected_asset))
    }

    pub fn select_next_asset(&mut self) {
        if let Some(images) = self.bundle.creative_assets() {
            self.selected_asset = (self.selected_asset + 1) % images.len();
        }
    }

    pub fn select_prev_asset(&mut self) {
        if let Some(images) = self.bundle.creative_assets() {
            self.selected_asset = self
                .selected_asset
                .checked_sub(1)
                .unwrap_or(images.len() - 1);
        }
    }
}
