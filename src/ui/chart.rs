//! Speedup chart widget.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::app::{App, Focus};
use crate::render::series_color;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Draw the chart of the visible series.
pub(super) fn draw_chart(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let visible = app.visible_series();
    let bounds = app.bounds();

    // Datasets borrow their points, so keep the filtered copies alive here.
    let series_points: Vec<(String, Color, Vec<(f64, f64)>)> = visible
        .iter()
        .map(|(index, series)| {
            let (r, g, b) = series_color(*index);
            let points = series
                .points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            (series.machine.clone(), Color::Rgb(r, g, b), points)
        })
        .collect();

    let mut datasets = Vec::with_capacity(series_points.len() * 2);
    for (machine, color, points) in &series_points {
        datasets.push(
            Dataset::default()
                .name(machine.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points),
        );
        // Unnamed, so it stays out of the legend.
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(*color))
                .data(points),
        );
    }

    let x_axis = Axis::default()
        .title(app.plot.x_label())
        .style(Style::default().fg(colors.text))
        .bounds([bounds.x_min, bounds.x_max])
        .labels(tick_labels(bounds.x_min, bounds.x_max));

    let y_axis = Axis::default()
        .title(app.plot.y_label())
        .style(Style::default().fg(colors.text))
        .bounds([bounds.y_min, bounds.y_max])
        .labels(tick_labels(bounds.y_min, bounds.y_max));

    let title = match app.focus {
        Focus::All => format!(" {} ", app.plot.title),
        Focus::Machine(_) => format!(
            " {} [{}] ",
            app.plot.title,
            visible.first().map(|(_, s)| s.machine.as_str()).unwrap_or("?")
        ),
    };

    let legend_position = if app.show_legend {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(Style::default().fg(colors.heading))
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

fn tick_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}
