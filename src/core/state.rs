//! # Application State
//!
//! Core business state for graphlog. This module contains domain logic only -
//! no TUI-specific types. Terminal handling lives in the `tui` module.
//!
//! ```text
//! App
//! ├── last_output: Option<String>   // payload of the last successful fetch
//! ├── error: Option<String>         // message of the last failed fetch
//! └── fetch_seq: u64                // sequence number of the latest fetch
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

pub struct App {
    /// Output of the most recent successful `git log` run. `None` until the
    /// first fetch resolves - "no data yet" is distinct from an empty payload.
    pub last_output: Option<String>,
    /// Message of the most recent failed fetch. Cleared by a later success.
    /// A failure leaves `last_output` untouched; the view hides it behind
    /// the error banner while an error is current.
    pub error: Option<String>,
    /// Sequence number of the most recently issued fetch. Completion
    /// messages carrying an older number are discarded, so a superseded
    /// fetch can never overwrite a fresher result.
    pub fetch_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            last_output: None,
            error: None,
            fetch_seq: 0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::App;

    #[test]
    fn new_app_has_nothing_resolved() {
        let app = App::new();
        assert!(app.last_output.is_none());
        assert!(app.error.is_none());
        assert_eq!(app.fetch_seq, 0);
    }
}
