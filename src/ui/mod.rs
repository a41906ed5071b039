//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Chart, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    chart::draw_chart(f, app, chunks[0], &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotStyle;
    use crate::data::{SpeedupRecord, XAxis};
    use crate::plot::Plot;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn record(machine: &str, grid: i64, speedup: f64) -> SpeedupRecord {
        SpeedupRecord {
            machine: machine.to_string(),
            grid,
            rho: 0.5,
            speedup,
        }
    }

    #[test]
    fn test_draw_shows_title_axes_and_status() {
        let plot = Plot::new(
            "Hunt speedup",
            XAxis::Grid,
            &[record("lab", 10, 1.0), record("lab", 40, 3.5), record("home", 20, 2.0)],
        );
        let app = App::new(plot, &PlotStyle::default());

        let screen = render(&app);

        assert!(screen.contains("Hunt speedup"));
        assert!(screen.contains("Grid size (gateSize)"));
        assert!(screen.contains("2 machines, 3 points"));
    }

    #[test]
    fn test_legend_lists_machines() {
        let plot = Plot::new(
            "Legend",
            XAxis::Grid,
            &[record("alpha", 10, 1.0), record("alpha", 20, 1.8), record("beta", 10, 1.1)],
        );
        let app = App::new(plot, &PlotStyle::default());

        let screen = render(&app);

        assert!(screen.contains("alpha"));
        assert!(screen.contains("beta"));
    }

    #[test]
    fn test_draw_empty_plot() {
        let app = App::new(Plot::new("Nothing", XAxis::Rho, &[]), &PlotStyle::default());
        let screen = render(&app);
        assert!(screen.contains("Nothing"));
        assert!(screen.contains("0 machines, 0 points"));
    }
}
