//! Plain-text listing of the grouped series.

use crate::plot::Plot;
use crate::ui::formatters::format_stat_value;

/// Format the grouped and sorted series the way they will be plotted.
pub fn format_summary(plot: &Plot) -> String {
    let mut text = format!("{}\n", plot.title);
    text.push_str(&format!("x: {} [{}]\n", plot.x_label(), plot.axis.column()));
    text.push_str(&format!("y: {}\n", plot.y_label()));
    text.push_str(&"=".repeat(40));
    text.push('\n');

    if plot.series.is_empty() {
        text.push_str("(no data)\n");
        return text;
    }

    for series in &plot.series.series {
        text.push_str(&format!("{} (points: {})\n", series.machine, series.points.len()));
        for &(x, y) in &series.points {
            text.push_str(&format!(
                "  {} -> {}\n",
                format_stat_value(x),
                format_stat_value(y)
            ));
        }
    }

    text
}
