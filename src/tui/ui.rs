//! Ratatui rendering of the projected display text.
//!
//! The projector in `core::view` decides what is said; this module decides
//! how it lands on the screen.

use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::core::view;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let text = strip_ansi(&view::project(app));
    frame.render_widget(Paragraph::new(text), frame.area());
}

/// Drop ANSI escape sequences from forced-color `git log` output so they
/// don't render as literal text.
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // CSI sequence: ESC '[' parameters, terminated by a byte in '@'..='~'.
        // Anything else after ESC is dropped along with the ESC itself.
        if chars.clone().next() == Some('[') {
            chars.next();
            for t in chars.by_ref() {
                if ('@'..='~').contains(&t) {
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{draw_ui, strip_ansi};
    use crate::core::state::App;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn strip_ansi_removes_color_codes() {
        let colored = "\u{1b}[33m* abc123\u{1b}[m commit";
        assert_eq!(strip_ansi(colored), "* abc123 commit");
    }

    #[test]
    fn strip_ansi_passes_plain_text_through() {
        assert_eq!(strip_ansi("* abc123 commit"), "* abc123 commit");
    }

    #[test]
    fn draw_ui_renders_loading_state() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
    }

    #[test]
    fn draw_ui_renders_error_state() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        app.error = Some("git log exited with status 128".to_string());
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
    }

    #[test]
    fn draw_ui_renders_colored_payload() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        app.last_output = Some("\u{1b}[33m* abc123\u{1b}[m first".to_string());
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
    }
}
