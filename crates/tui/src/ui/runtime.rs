//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Own the terminal (raw mode, alternate screen, mouse capture).
//! - Drive a single `tokio::select!` loop over input events, periodic
//!   ticks, and Ctrl+C.
//! - Route events through [`MainView`], then apply returned `Effect`s.
//! - Render only when a frame is dirty.
//!
//! Input is read on a dedicated thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel; keeping
//! `poll()` and `read()` on one OS thread avoids lost or delayed events in
//! some terminals. Navigation effects are applied synchronously, in order,
//! before the next event is processed: the route store updates (and
//! notifies its subscribers) before the content view re-renders.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lumina_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use std::time::Duration;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::RunOptions;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use rat_focus::FocusBuilder;

/// Liveness tick while idle; there are no animations to drive.
const IDLE_TICK: Duration = Duration::from_secs(5);

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel. Mouse-move events are
/// dropped at the source; the shell only reacts to clicks and scrolls.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    std::thread::spawn(move || {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let is_mouse_move = event
                            .as_mouse_event()
                            .is_some_and(|e| e.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            continue;
                        }
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("failed to read terminal event: {error}");
                        break;
                    }
                },
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("failed to poll terminal events: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding the focus tree first so structural changes
/// (opened parents, collapse toggles) are reflected.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        app.focus.first();
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Routes one raw crossterm event into the view tree.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Applies effects in order. Navigation updates the store (which notifies
/// subscribers) before dependent state resynchronizes, so every reader
/// observes the new route within the same interaction.
fn process_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Navigate(href) => {
                debug!(%href, "navigate");
                app.navigate(&href);
            }
            Effect::ToggleSidebar => {
                app.toggle_sidebar();
            }
            Effect::ShowModal(modal) => {
                app.open_modal_kind = Some(modal);
            }
            Effect::CloseModal => {
                app.open_modal_kind = None;
            }
        }
    }
}

/// Entry point for the TUI runtime: terminal setup, event loop, teardown.
pub async fn run_app(options: RunOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::default();
    let mut app = App::new(&options)?;
    let mut terminal = setup_terminal()?;

    let mut ticker = time::interval(IDLE_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    // Track the last known terminal size to synthesize resize handling when
    // a terminal fails to emit the event reliably.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(&mut app, &mut main_view, event);
                process_effects(&mut app, effects);
                needs_render = true;
            }

            _ = ticker.tick() => {
                let effects = main_view.handle_message(&mut app, Msg::Tick);
                needs_render = !effects.is_empty();
                process_effects(&mut app, effects);
            }

            _ = signal::ctrl_c() => { break; }
        }

        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            let effects = main_view.handle_message(&mut app, Msg::Resize(w, h));
            process_effects(&mut app, effects);
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    // Session teardown discards per-instance expansion state.
    app.sidebar.teardown();
    cleanup_terminal(&mut terminal)?;
    Ok(())
}
