//! Submission Orchestrator
//!
//! Runs one form submission end to end:
//!
//! 1. Hide results and error, show the loading indicator
//! 2. Bail out quietly on empty input
//! 3. Fetch posts, render them, derive the subreddit id
//! 4. Fetch subreddit info, render it
//! 5. Hide loading, show results
//!
//! Any failure in 3-5 hides loading and shows the error banner.

use std::cell::Cell;

use crate::api::SubredditApi;
use crate::error::WidgetError;
use crate::extract::{extract_info_data, extract_posts_data, extract_subreddit_id};
use crate::guard::Ticket;
use crate::templates::Templates;
use crate::ui::{UiController, UiPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Loading,
    PostsFetched,
    Rendering,
    InfoFetched,
    Done,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Posts and details are on screen
    Rendered { post_count: usize },
    /// Input was empty; loading indicator stays up
    EmptyInput,
    /// A newer submission took over before this one finished
    Superseded,
    /// Error banner is showing
    Failed(WidgetError),
}

/// Why the pipeline stopped early
enum Halt {
    Superseded,
    Failed(WidgetError),
}

impl From<WidgetError> for Halt {
    fn from(err: WidgetError) -> Self {
        Halt::Failed(err)
    }
}

pub struct Orchestrator<'a, A: SubredditApi, P: UiPort> {
    api: &'a A,
    templates: &'a Templates,
    ui: UiController<'a, P>,
    ticket: Ticket,
    phase: Cell<SubmissionPhase>,
}

impl<'a, A: SubredditApi, P: UiPort> Orchestrator<'a, A, P> {
    pub fn new(api: &'a A, templates: &'a Templates, port: &'a P, ticket: Ticket) -> Self {
        Self {
            api,
            templates,
            ui: UiController::new(port),
            ticket,
            phase: Cell::new(SubmissionPhase::Idle),
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    fn transition(&self, next: SubmissionPhase) {
        log::debug!(
            "[SUBMIT #{}] {:?} -> {:?}",
            self.ticket.id(),
            self.phase.get(),
            next
        );
        self.phase.set(next);
    }

    fn ensure_current(&self) -> Result<(), Halt> {
        if self.ticket.is_current() {
            Ok(())
        } else {
            Err(Halt::Superseded)
        }
    }

    pub async fn handle_submit(&self) -> SubmitOutcome {
        self.ui.trigger_display_results(false);
        self.ui.trigger_error(false);
        self.ui.trigger_loading(true);

        self.transition(SubmissionPhase::Validating);
        if !self.ui.check_subreddit_input() {
            log::debug!("[SUBMIT #{}] empty input, ignoring", self.ticket.id());
            self.transition(SubmissionPhase::Error);
            return SubmitOutcome::EmptyInput;
        }

        match self.run(self.ui.get_subreddit_input()).await {
            Ok(post_count) => {
                self.transition(SubmissionPhase::Done);
                SubmitOutcome::Rendered { post_count }
            }
            Err(Halt::Superseded) => {
                log::debug!("[SUBMIT #{}] superseded by a newer submission", self.ticket.id());
                SubmitOutcome::Superseded
            }
            Err(Halt::Failed(err)) => {
                self.transition(SubmissionPhase::Error);
                self.ui.trigger_loading(false);
                self.ui.trigger_error(true);
                log::error!("[SUBMIT #{}] {}", self.ticket.id(), err);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn run(&self, subreddit: String) -> Result<usize, Halt> {
        self.transition(SubmissionPhase::Loading);
        let posts_raw = self.api.fetch_posts(&subreddit).await.map_err(WidgetError::from);
        self.ensure_current()?;
        let posts_raw = posts_raw?;
        self.transition(SubmissionPhase::PostsFetched);

        self.transition(SubmissionPhase::Rendering);
        let posts = extract_posts_data(&posts_raw);
        self.ui.render_results(self.templates.posts.render(&posts)?);
        log::info!("[SUBMIT #{}] rendered {} posts from r/{}", self.ticket.id(), posts.len(), subreddit);

        let subreddit_id = extract_subreddit_id(&posts_raw)?;
        let info_raw = self.api.fetch_info(&subreddit_id).await.map_err(WidgetError::from);
        self.ensure_current()?;
        let info_raw = info_raw?;
        self.transition(SubmissionPhase::InfoFetched);

        let details = extract_info_data(&info_raw)?;
        self.ui.render_details(self.templates.details.render(&details)?);
        self.ui.trigger_loading(false);
        self.ui.trigger_display_results(true);
        Ok(posts.len())
    }
}
