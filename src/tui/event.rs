use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// `q` or Ctrl+C.
    Quit,
    /// `r` - fetch the log again.
    Refresh,
    /// The terminal was resized - triggers a re-render.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(Event::Key(key)) => translate(key),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Map a keypress to its event, if any. Unrecognized keys return `None`
/// and never reach the reducer - an ignored key is a no-op, not an error.
fn translate(key: KeyEvent) -> Option<TuiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        _ => None,
    }
}
