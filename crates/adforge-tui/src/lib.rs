//! adforge-tui - Terminal UI for adforge
//!
//! This crate provides the ratatui-based terminal interface on top of the
//! adforge-app state machine: terminal lifecycle, event polling, the view
//! function, and the widgets (collapsible sections, submission form, results).

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
