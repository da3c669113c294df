//! Routes and the typed hand-off between screens

use std::sync::Arc;

use adforge_core::GenerationResult;

/// Screens the app can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Submission,
    Results,
}

/// Data handed to the target screen on navigation.
///
/// The Results screen has no fetch path of its own; it renders exactly the
/// bundle it is handed, or redirects when handed `Missing`.
#[derive(Debug, Clone, Default)]
pub enum Handoff {
    /// A bundle from a successful submission
    Bundle(Arc<GenerationResult>),
    /// No data (direct entry, or a route that takes none)
    #[default]
    Missing,
}
