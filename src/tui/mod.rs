// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, redraw frames, rotation ticks)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::rotator::scheduler::{IntervalTicks, TickSource};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use traits::Interactive;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!(
        ticks = app.rotator.counter(),
        lines = app.rotator.sink().len(),
        "TUI closed"
    );

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard and mouse input
/// 2. Frame ticks (periodic redraws, so the scroll grace window expires
///    visibly)
/// 3. Rotation ticks (new log content, gated on the panel's visibility)
///
/// The frame is drawn before waiting, so the visibility a rotation tick
/// sees is always that of the latest draw.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let mut frame_interval = tokio::time::interval(config.frame);
    let mut rotation = IntervalTicks::every(config.period);

    tracing::info!(
        period_ms = rotation.period().as_millis() as u64,
        capacity = app.rotator.sink().capacity(),
        "Starting TUI"
    );

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event, Instant::now()),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event, Instant::now()),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = frame_interval.tick() => {}

            // Rotation tick
            more = rotation.next_tick() => {
                if more {
                    app.on_rotation_tick();
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Overlay → Global → Logs panel
fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C always quits (raw mode swallows SIGINT)
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Help overlay captures all input while open
    if app.show_help {
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Layer 2: Global keys
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_maximized();
            return;
        }
        KeyCode::Esc => {
            if app.maximized {
                app.toggle_maximized();
            }
            return;
        }
        _ => {}
    }

    // Layer 3: Logs panel (scroll keys mark the user as scrolling)
    if app.logs_panel.handle_key(key_event).was_handled() {
        app.mark_scrolling(now);
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent, now: Instant) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };

    // Overlay covers the panel
    if app.show_help {
        return;
    }

    // Synthesize key event for trait dispatch
    let key_event = KeyEvent::new(code, KeyModifiers::NONE);
    if app.logs_panel.handle_key(key_event).was_handled() {
        app.mark_scrolling(now);
    }
}
