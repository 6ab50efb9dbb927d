//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, the event loop, and the
//! channel that background fetches report into.
//!
//! The loop is deliberately explicit: poll the keyboard with a timeout,
//! drain completed fetch actions, fold everything through `core::update`,
//! then carry out the returned effects. No hidden scheduler owns the
//! program, and nothing but this loop touches the state.

mod event;
mod ui;

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::git;
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// How long one keyboard poll may block before the loop drains the action
/// channel again.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub fn run() -> io::Result<()> {
    let mut app = App::new();
    let mut terminal = ratatui::try_init()?;

    // Channel for actions reported by background fetch tasks.
    let (tx, rx) = mpsc::channel::<Action>();

    // Handle of the in-flight fetch, aborted on supersede and on quit.
    let mut in_flight: Option<JoinHandle<()>> = None;

    // Fetch once at startup so the user sees data without pressing a key.
    let effect = update(&mut app, Action::Refresh);
    run_effect(effect, &app, &mut in_flight, &tx);

    let mut needs_redraw = true; // Force first frame

    let res = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let mut should_quit = false;

        if let Some(ev) = poll_event_timeout(POLL_TIMEOUT) {
            needs_redraw = true;
            let action = match ev {
                TuiEvent::Resize => None, // redraw already flagged
                TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::Refresh => Some(Action::Refresh),
            };
            if let Some(action) = action {
                let effect = update(&mut app, action);
                should_quit |= run_effect(effect, &app, &mut in_flight, &tx);
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("event loop received: {action:?}");
            let effect = update(&mut app, action);
            should_quit |= run_effect(effect, &app, &mut in_flight, &tx);
        }

        if should_quit {
            break Ok(());
        }
    };

    // Quit does not wait for an in-flight fetch; its result is never
    // delivered because the receiver goes away with the loop.
    if let Some(handle) = in_flight.take() {
        handle.abort();
    }

    ratatui::restore();
    res
}

/// Carry out the effect `update` named. Returns true when the loop should
/// exit.
fn run_effect(
    effect: Effect,
    app: &App,
    in_flight: &mut Option<JoinHandle<()>>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::Fetch => {
            // At most one fetch lives at a time: abort the superseded task
            // before spawning its replacement. The sequence check in the
            // reducer catches any result that races the abort.
            if let Some(handle) = in_flight.take() {
                handle.abort();
            }
            *in_flight = Some(spawn_fetch(app.fetch_seq, tx.clone()));
            false
        }
        Effect::None => false,
    }
}

/// Run one fetch on a background task and report the outcome as an action.
/// Exactly one of `FetchCompleted`/`FetchFailed` is sent per call.
fn spawn_fetch(seq: u64, tx: mpsc::Sender<Action>) -> JoinHandle<()> {
    info!("spawning git log fetch (seq {seq})");
    tokio::spawn(async move {
        let action = match git::fetch_log().await {
            Ok(output) => Action::FetchCompleted { seq, output },
            Err(error) => Action::FetchFailed { seq, error },
        };
        if tx.send(action).is_err() {
            // The loop has exited; the result is intentionally discarded.
            warn!("fetch result for seq {seq} dropped: receiver closed");
        }
    })
}
