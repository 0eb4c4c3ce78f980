// Views module - screen-level rendering logic
//
// Normal view: side panel (2/7) beside the main panel (5/7); the main panel
// stacks the logs over the action buttons. Maximized view: the logs panel
// alone. The status bar is always at the bottom and the help overlay, when
// open, is drawn over everything.

mod help;

use super::app::App;
use super::layout::Breakpoint;
use crate::tui::components::{action_buttons, logs_panel, side_panel, status_bar};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the status bar (top border + one line)
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(f.area());

    if app.maximized {
        logs_panel::render(f, body, app);
    } else {
        let main = if Breakpoint::from_width(body.width).shows_side_panel() {
            let [side, main] =
                Layout::horizontal([Constraint::Ratio(2, 7), Constraint::Ratio(5, 7)]).areas(body);
            side_panel::render(f, side, &app.theme);
            main
        } else {
            body
        };

        let [logs, buttons] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(action_buttons::HEIGHT),
        ])
        .areas(main);
        logs_panel::render(f, logs, app);
        action_buttons::render(f, buttons, &app.theme);
    }

    status_bar::render(f, status, app);

    if app.show_help {
        help::render(f, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rotator::scheduler::SuspendReason;
    use crate::rotator::TickOutcome;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn draw_app(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut term = Terminal::new(TestBackend::new(width, height)).expect("term");
        term.draw(|f| draw(f, app)).expect("draw");

        let buffer = term.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_normal_layout_shows_all_panels() {
        let mut app = App::new(&Config::default());
        let rows = draw_app(&mut app, 120, 30);

        assert!(screen_contains(&rows, "User Stats"));
        assert!(screen_contains(&rows, "Card Display"));
        assert!(screen_contains(&rows, "Strength"));
        assert!(screen_contains(&rows, "Charisma"));
        assert!(screen_contains(&rows, "Logs"));
        assert!(screen_contains(&rows, crate::rotator::GREETING));
        assert!(app.logs_panel.viewport_height() > 0);
    }

    #[test]
    fn test_compact_layout_drops_side_panel() {
        let mut app = App::new(&Config::default());
        let rows = draw_app(&mut app, 50, 20);

        assert!(!screen_contains(&rows, "User Stats"));
        assert!(screen_contains(&rows, "Logs"));
        assert!(app.logs_panel.viewport_height() > 0);
    }

    #[test]
    fn test_tiny_terminal_obscures_logs() {
        let mut app = App::new(&Config::default());
        draw_app(&mut app, 50, 6);

        // 6 rows: status bar 2, buttons 3, logs 1 (border only)
        assert_eq!(app.logs_panel.viewport_height(), 0);
        assert_eq!(
            app.rotation_tick_at(Instant::now()),
            TickOutcome::Suspended(SuspendReason::Obscured)
        );
    }

    #[test]
    fn test_maximized_view_hides_buttons() {
        let mut app = App::new(&Config::default());
        app.toggle_maximized();
        let rows = draw_app(&mut app, 120, 30);

        assert!(screen_contains(&rows, "[maximized]"));
        assert!(!screen_contains(&rows, "Strength"));
        assert!(!screen_contains(&rows, "User Stats"));
    }

    #[test]
    fn test_help_overlay_is_drawn() {
        let mut app = App::new(&Config::default());
        app.toggle_help();
        let rows = draw_app(&mut app, 120, 30);

        assert!(screen_contains(&rows, "Help"));
        assert!(screen_contains(&rows, "Toggle maximized logs"));
    }

    #[test]
    fn test_paused_reason_in_title() {
        let mut app = App::new(&Config::default());
        // Not drawn yet: first tick is suspended
        app.rotation_tick_at(Instant::now());
        let rows = draw_app(&mut app, 120, 30);

        assert!(screen_contains(&rows, "paused: hidden"));
    }

    #[test]
    fn test_produced_block_is_on_screen() {
        let mut app = App::new(&Config::default());
        draw_app(&mut app, 120, 40);
        assert!(matches!(
            app.rotation_tick_at(Instant::now()),
            TickOutcome::Produced(_)
        ));

        let rows = draw_app(&mut app, 120, 40);
        assert!(screen_contains(&rows, "A Rich Table"));
        assert!(screen_contains(&rows, "Joseph Schooling"));
    }

    #[test]
    fn test_long_code_lines_wrap_at_80_columns() {
        let mut app = App::new(&Config::default());
        app.toggle_maximized();
        for _ in 0..3 {
            app.rotator.produce();
        }

        let mut term = Terminal::new(TestBackend::new(80, 40)).expect("term");
        term.draw(|f| draw(f, &mut app)).expect("draw");
        let buffer = term.backend().buffer();

        // Inner cells of the maximized logs panel (rows 1..37, columns 1..79)
        let text: String = (1..37u16)
            .flat_map(|y| (1..79u16).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        assert!(text.contains("pubfnloop_first_last<T>"), "{text}");
        assert!(text.contains("->Vec<(bool,bool,T)>{"), "{text}");
    }
}
