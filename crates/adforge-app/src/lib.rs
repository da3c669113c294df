//! adforge-app - Application state and orchestration for adforge
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the Submission and Results screens, the typed hand-off between
//! them, the disclosure primitive's state, configuration loading, and the
//! action layer that runs the single generation request.

pub mod actions;
pub mod config;
pub mod disclosure;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod results;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use disclosure::Disclosure;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{Handoff, Route};
pub use results::{ResultSection, ResultsEntry, ResultsState, SectionIcon, SectionKind};
pub use actions::{abort_all, GenerationTaskMap};
pub use config::{IconMode, Settings, StartupOptions};
pub use process::process_message;
pub use state::{AppPhase, AppState, Screen};
pub use submission::{RequestId, SubmissionField, SubmissionState, SubmitBlocked};

// Re-export client types for TUI
pub use adforge_client::Endpoints;
