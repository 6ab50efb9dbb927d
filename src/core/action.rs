//! # Actions
//!
//! Everything that can happen in graphlog becomes an `Action`.
//! User presses `r`? That's `Action::Refresh`.
//! The fetch task finishes? That's `Action::FetchCompleted`.
//!
//! The `update()` function takes the current state and an action, folds the
//! action in, and returns the effect the event loop should carry out.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::state::App;
use crate::git::GitError;

/// Everything that can happen in the app. Each value is consumed exactly
/// once by `update` and never stored.
#[derive(Debug)]
pub enum Action {
    /// Schedule a (re-)fetch of the log. Also the startup action.
    Refresh,
    /// Terminate the event loop.
    Quit,
    /// A fetch task finished successfully.
    FetchCompleted { seq: u64, output: String },
    /// A fetch task could not launch git or git exited non-zero.
    FetchFailed { seq: u64, error: GitError },
}

/// What the event loop must do after an update. `update` itself never
/// performs I/O; the loop interprets these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond a redraw.
    None,
    /// Spawn a fetch tagged with the state's current `fetch_seq`.
    Fetch,
    /// Leave the event loop.
    Quit,
}

/// The reducer: the sole writer of `App`.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Refresh => {
            // A refresh supersedes any in-flight fetch: bumping the sequence
            // number invalidates the old task's result, and the loop aborts
            // its handle before spawning the next one.
            app.fetch_seq += 1;
            Effect::Fetch
        }
        Action::FetchCompleted { seq, output } => {
            if seq != app.fetch_seq {
                debug!(
                    "discarding stale fetch result (seq {seq}, latest {})",
                    app.fetch_seq
                );
                return Effect::None;
            }
            app.last_output = Some(output);
            app.error = None;
            Effect::None
        }
        Action::FetchFailed { seq, error } => {
            if seq != app.fetch_seq {
                debug!(
                    "discarding stale fetch failure (seq {seq}, latest {})",
                    app.fetch_seq
                );
                return Effect::None;
            }
            // Keep the previous output; the view gives the error priority.
            app.error = Some(error.to_string());
            Effect::None
        }
    }
}
