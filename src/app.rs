//! Application state and logic for the interactive viewer.

use crate::config::PlotStyle;
use crate::data::{Bounds, Series};
use crate::plot::Plot;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which series the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Every machine.
    All,
    /// A single machine, by index into the series set.
    Machine(usize),
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The chart being viewed.
    pub plot: Plot,
    /// Current focus.
    pub focus: Focus,
    /// Legend visibility.
    pub show_legend: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Axis range padding.
    range_padding: f64,
}

impl App {
    /// Create a new application instance.
    pub fn new(plot: Plot, style: &PlotStyle) -> Self {
        let status = format!(
            "{} machines, {} points",
            plot.series.len(),
            plot.series.point_count()
        );
        Self {
            show_legend: plot.series.show_legend(),
            plot,
            focus: Focus::All,
            status,
            theme: Theme::GruvboxDark,
            range_padding: style.range_padding,
        }
    }

    /// Series currently drawn, with their index into the full set (the index
    /// picks the colour, so a machine keeps its colour when focused).
    pub fn visible_series(&self) -> Vec<(usize, &Series)> {
        match self.focus {
            Focus::All => self.plot.series.series.iter().enumerate().collect(),
            Focus::Machine(index) => self
                .plot
                .series
                .series
                .get(index)
                .map(|s| vec![(index, s)])
                .unwrap_or_default(),
        }
    }

    /// Axis ranges for the visible series.
    pub fn bounds(&self) -> Bounds {
        match self.focus {
            Focus::All => self.plot.series.bounds(self.range_padding),
            Focus::Machine(index) => self.plot.series.series_bounds(index, self.range_padding),
        }
    }

    /// Focus the next machine, wrapping back to all machines.
    pub fn next_focus(&mut self) {
        let count = self.plot.series.len();
        self.focus = match self.focus {
            _ if count == 0 => Focus::All,
            Focus::All => Focus::Machine(0),
            Focus::Machine(i) if i + 1 < count => Focus::Machine(i + 1),
            Focus::Machine(_) => Focus::All,
        };
        self.update_focus_status();
    }

    /// Focus the previous machine, wrapping back to all machines.
    pub fn prev_focus(&mut self) {
        let count = self.plot.series.len();
        self.focus = match self.focus {
            _ if count == 0 => Focus::All,
            Focus::All => Focus::Machine(count - 1),
            Focus::Machine(0) => Focus::All,
            Focus::Machine(i) => Focus::Machine(i - 1),
        };
        self.update_focus_status();
    }

    fn update_focus_status(&mut self) {
        self.status = match self.focus {
            Focus::All => "Showing all machines".to_string(),
            Focus::Machine(i) => format!("Showing {}", self.plot.series.series[i].machine),
        };
    }

    /// Toggle the legend.
    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        self.status = if self.show_legend {
            "Legend: ON".to_string()
        } else {
            "Legend: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status line.
    pub fn show_help(&mut self) {
        self.status = "Help: q=quit, Tab/S-Tab=focus machine, l=legend, T=theme".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SpeedupRecord, XAxis};

    fn app(machines: &[&str]) -> App {
        let records: Vec<SpeedupRecord> = machines
            .iter()
            .enumerate()
            .map(|(i, m)| SpeedupRecord {
                machine: m.to_string(),
                grid: 10 * (i as i64 + 1),
                rho: 0.1,
                speedup: 1.0 + i as f64,
            })
            .collect();
        App::new(Plot::new("t", XAxis::Grid, &records), &PlotStyle::default())
    }

    #[test]
    fn test_focus_cycles_forward() {
        let mut app = app(&["a", "b"]);
        assert_eq!(app.focus, Focus::All);
        app.next_focus();
        assert_eq!(app.focus, Focus::Machine(0));
        assert_eq!(app.status, "Showing a");
        app.next_focus();
        assert_eq!(app.focus, Focus::Machine(1));
        app.next_focus();
        assert_eq!(app.focus, Focus::All);
    }

    #[test]
    fn test_focus_cycles_backward() {
        let mut app = app(&["a", "b"]);
        app.prev_focus();
        assert_eq!(app.focus, Focus::Machine(1));
        app.prev_focus();
        assert_eq!(app.focus, Focus::Machine(0));
        app.prev_focus();
        assert_eq!(app.focus, Focus::All);
    }

    #[test]
    fn test_focus_without_series() {
        let mut app = app(&[]);
        app.next_focus();
        assert_eq!(app.focus, Focus::All);
        app.prev_focus();
        assert_eq!(app.focus, Focus::All);
        assert!(app.visible_series().is_empty());
    }

    #[test]
    fn test_focused_series_keeps_index() {
        let mut app = app(&["a", "b", "c"]);
        app.next_focus();
        app.next_focus();
        let visible = app.visible_series();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 1);
        assert_eq!(visible[0].1.machine, "b");

        let b = app.bounds();
        assert!(b.x_min < 20.0 && b.x_max > 20.0);
    }

    #[test]
    fn test_legend_defaults_and_toggle() {
        let mut single = app(&["a"]);
        assert!(!single.show_legend);
        single.toggle_legend();
        assert!(single.show_legend);
        assert_eq!(single.status, "Legend: ON");

        assert!(app(&["a", "b"]).show_legend);
    }

    #[test]
    fn test_theme_cycle() {
        let mut app = app(&["a"]);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
    }
}
