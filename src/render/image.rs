//! Chart drawing with `plotters`.

use super::{series_color, OutputFormat};
use crate::config::PlotConfig;
use crate::error::Result;
use crate::plot::Plot;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Render a plot to an image file. The format follows the file extension.
pub fn render_to_file(plot: &Plot, config: &PlotConfig, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let size = config.pixel_size();

    tracing::info!(
        "Rendering {} series to {} ({:?}, {}x{} px)",
        plot.series.len(),
        path.display(),
        format,
        size.0,
        size.1
    );

    if format.is_bitmap() {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_chart(&root, plot, config)?;
        root.present()?;
    } else {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_chart(&root, plot, config)?;
        root.present()?;
    }

    tracing::info!("Successfully rendered chart to {}", path.display());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &Plot,
    config: &PlotConfig,
) -> Result<()> {
    let style = &config.style;
    let px = |points: f64| config.points_to_px(points);

    let title_font = FontDesc::new(FontFamily::SansSerif, px(style.title_pt), FontStyle::Normal);
    let label_font = FontDesc::new(FontFamily::SansSerif, px(style.label_pt), FontStyle::Normal);
    let line_width = px(style.line_pt).round().max(1.0) as u32;
    let marker_radius = (px(style.marker_pt) / 2.0).round().max(1.0) as u32;
    let margin = px(8.0).round() as u32;

    root.fill(&WHITE)?;

    let bounds = plot.series.bounds(style.range_padding);
    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, title_font)
        .margin(margin)
        .x_label_area_size(px(30.0).round() as u32)
        .y_label_area_size(px(40.0).round() as u32)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_label())
        .y_desc(plot.y_label())
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for (index, series) in plot.series.series.iter().enumerate() {
        let (r, g, b) = series_color(index);
        let color = RGBColor(r, g, b);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        tracing::debug!("Drawing {} ({} points)", series.machine, points.len());

        chart
            .draw_series(
                LineSeries::new(points, color.stroke_width(line_width)).point_size(marker_radius),
            )?
            .label(series.machine.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    if plot.series.show_legend() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .label_font(label_font)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    Ok(())
}
