//! UI Components

mod subreddit_form;
mod results_panel;

pub use subreddit_form::SubredditForm;
pub use results_panel::ResultsPanel;
