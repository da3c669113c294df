//! Application state (Model in TEA pattern)

use adforge_client::Endpoints;
use adforge_core::prelude::*;

use crate::config::{Settings, StartupOptions};
use crate::navigation::{Handoff, Route};
use crate::results::{ResultsEntry, ResultsState};
use crate::submission::{RequestId, SubmissionState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The mounted screen. Exactly one is alive at a time; leaving a screen
/// drops its state.
#[derive(Debug, Clone)]
pub enum Screen {
    Submission(SubmissionState),
    Results(Box<ResultsState>),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Submission(_) => Route::Submission,
            Screen::Results(_) => Route::Results,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub settings: Settings,
    pub endpoints: Endpoints,
    next_request_id: RequestId,
}

impl AppState {
    /// Start on a blank Submission screen
    pub fn new(settings: Settings, endpoints: Endpoints) -> Self {
        Self {
            phase: AppPhase::Running,
            screen: Screen::Submission(SubmissionState::new()),
            settings,
            endpoints,
            next_request_id: 1,
        }
    }

    /// Start on the route requested at launch. The form pre-fill only
    /// applies to this first mount. Nothing is ever handed over at launch,
    /// so asking for Results redirects.
    pub fn with_startup(settings: Settings, endpoints: Endpoints, options: &StartupOptions) -> Self {
        let mut state = Self::new(settings, endpoints);
        state.navigate(options.initial_route, Handoff::Missing);
        if let Screen::Submission(_) = state.screen {
            state.screen = Screen::Submission(SubmissionState::with_prefill(
                options.prefill_url.clone(),
                options.prefill_file.clone(),
            ));
        }
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn submission(&self) -> Option<&SubmissionState> {
        match &self.screen {
            Screen::Submission(form) => Some(form),
            Screen::Results(_) => None,
        }
    }

    pub fn submission_mut(&mut self) -> Option<&mut SubmissionState> {
        match &mut self.screen {
            Screen::Submission(form) => Some(form),
            Screen::Results(_) => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsState> {
        match &self.screen {
            Screen::Results(results) => Some(results),
            Screen::Submission(_) => None,
        }
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultsState> {
        match &mut self.screen {
            Screen::Results(results) => Some(results),
            Screen::Submission(_) => None,
        }
    }

    /// Hand out the id for the next submit attempt
    pub fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Mount the screen for `route`.
    ///
    /// Submission always gets a fresh form. Results is built from the
    /// hand-off; without a bundle it redirects to Submission.
    pub fn navigate(&mut self, route: Route, handoff: Handoff) {
        self.screen = match route {
            Route::Submission => Screen::Submission(SubmissionState::new()),
            Route::Results => match ResultsState::enter(handoff) {
                ResultsEntry::Ready(results) => {
                    debug!(
                        "Mounted results with {} sections",
                        results.sections().len()
                    );
                    Screen::Results(results)
                }
                ResultsEntry::Redirect => {
                    warn!("Results opened without a generation result, redirecting");
                    Screen::Submission(SubmissionState::new())
                }
            },
        };
    }
}
