//! # Render Projector
//!
//! The pure mapping from state to display text. Calling `project` any
//! number of times with the same state yields byte-identical output.
//! Rendering cadence, layout, and escape handling belong to the TUI
//! adapter; this module only decides what is said.

use crate::core::state::App;

/// Shown until the first fetch resolves.
pub const LOADING_TEXT: &str = "Loading git history...";

const HEADER: &str = "--- graphlog (Press 'q' to quit, 'r' to refresh) ---";

/// Project the state into display text.
///
/// Priority: an error banner wins over everything, then the loading
/// placeholder, then the framed payload.
pub fn project(app: &App) -> String {
    if let Some(error) = &app.error {
        return format!("Error: {error}");
    }
    let Some(output) = &app.last_output else {
        return LOADING_TEXT.to_string();
    };
    format!("{HEADER}\n\n{output}\n\n")
}

#[cfg(test)]
mod tests {
    use super::{LOADING_TEXT, project};
    use crate::core::action::{Action, update};
    use crate::core::state::App;
    use crate::git::GitError;

    #[test]
    fn projection_is_pure() {
        let mut app = App::new();
        app.last_output = Some("* abc".to_string());
        assert_eq!(project(&app), project(&app));
    }

    #[test]
    fn initial_state_renders_only_the_loading_placeholder() {
        assert_eq!(project(&App::new()), LOADING_TEXT);
    }

    #[test]
    fn error_banner_takes_precedence_over_stale_output() {
        let mut app = App::new();
        app.last_output = Some("* stale graph".to_string());
        app.error = Some("git log exited with status 128".to_string());

        let text = project(&app);
        assert!(text.starts_with("Error: "), "got: {text}");
        assert!(!text.contains("stale graph"), "got: {text}");
    }

    #[test]
    fn successful_fetch_renders_framed_payload() {
        let mut app = App::new();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::FetchCompleted {
                seq: 1,
                output: "abc".to_string(),
            },
        );

        let text = project(&app);
        assert!(text.contains("abc"), "got: {text}");
        assert!(!text.contains("Error"), "got: {text}");
        assert!(text.contains("'q' to quit"), "header missing: {text}");
    }

    #[test]
    fn failed_fetch_renders_the_cause() {
        let mut app = App::new();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::FetchFailed {
                seq: 1,
                error: GitError::Exited {
                    code: 128,
                    detail: "fatal: not a git repository".to_string(),
                },
            },
        );

        let text = project(&app);
        assert!(text.contains("128"), "got: {text}");
        assert!(text.contains("not a git repository"), "got: {text}");
    }

    #[test]
    fn success_after_failure_clears_the_banner() {
        let mut app = App::new();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::FetchFailed {
                seq: 1,
                error: GitError::Exited {
                    code: 1,
                    detail: String::new(),
                },
            },
        );
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::FetchCompleted {
                seq: 2,
                output: "* fresh".to_string(),
            },
        );

        let text = project(&app);
        assert!(text.contains("fresh"), "got: {text}");
        assert!(!text.contains("Error"), "got: {text}");
    }
}
