//! Widget components for the TUI

mod disclosure;
mod header;
mod results_view;
mod submission_form;

pub use disclosure::Disclosure;
pub use header::{KeyHints, MainHeader};
pub use results_view::ResultsView;
pub use submission_form::SubmissionForm;
