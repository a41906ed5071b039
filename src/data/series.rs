//! Per-machine series.

use super::{SpeedupRecord, XAxis};
use std::collections::BTreeMap;

/// Points measured on one machine, sorted by X then Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Machine name, used as the legend label.
    pub machine: String,
    /// `(x, speedup)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Axis ranges covering a set of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower X bound.
    pub x_min: f64,
    /// Upper X bound.
    pub x_max: f64,
    /// Lower Y bound.
    pub y_min: f64,
    /// Upper Y bound.
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

/// All series of a plot, ordered by machine name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    /// The series.
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// Group records by machine and sort each group's points.
    pub fn group(records: &[SpeedupRecord], axis: XAxis) -> Self {
        let mut groups: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.machine.as_str())
                .or_default()
                .push((axis.value(record), record.speedup));
        }

        let series = groups
            .into_iter()
            .map(|(machine, mut points)| {
                points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
                tracing::debug!("Series {}: {} points", machine, points.len());
                Series {
                    machine: machine.to_string(),
                    points,
                }
            })
            .collect();

        Self { series }
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True if there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of points over all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// A legend is only useful with more than one series.
    pub fn show_legend(&self) -> bool {
        self.series.len() > 1
    }

    /// Axis ranges over all finite points, widened by `padding` times the
    /// span on each side.
    pub fn bounds(&self, padding: f64) -> Bounds {
        bounds_of(self.series.iter(), padding)
    }

    /// Axis ranges over a single series.
    pub fn series_bounds(&self, index: usize, padding: f64) -> Bounds {
        bounds_of(self.series.get(index).into_iter(), padding)
    }
}

/// Lowest axis bound allowed; the widest span is `f64::MAX / 2`.
const SPAN_LIMIT: f64 = f64::MIN / 4.0;

fn bounds_of<'a>(series: impl Iterator<Item = &'a Series>, padding: f64) -> Bounds {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut skipped = 0usize;

    for &(x, y) in series.flat_map(|s| s.points.iter()) {
        if !x.is_finite() || !y.is_finite() {
            skipped += 1;
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if skipped > 0 {
        tracing::warn!("Ignoring {} non-finite points for axis ranges", skipped);
    }

    if x_min > x_max {
        return Bounds::default();
    }

    let (x_min, x_max) = pad(x_min, x_max, padding);
    let (y_min, y_max) = pad(y_min, y_max, padding);
    Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn pad(min: f64, max: f64, padding: f64) -> (f64, f64) {
    // Keep the span representable so axis tick computation stays finite.
    let (min, max) = if (max - min).is_finite() {
        (min, max)
    } else {
        (min.max(SPAN_LIMIT), max.min(-SPAN_LIMIT))
    };
    if max - min <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5, max + 0.5);
    }
    let margin = (max - min) * padding;
    let (lo, hi) = (min - margin, max + margin);
    if (hi - lo).is_finite() {
        (lo, hi)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(machine: &str, grid: i64, rho: f64, speedup: f64) -> SpeedupRecord {
        SpeedupRecord {
            machine: machine.to_string(),
            grid,
            rho,
            speedup,
        }
    }

    #[test]
    fn test_group_orders_machines_and_points() {
        let records = vec![
            record("zeta", 40, 0.2, 3.0),
            record("alpha", 20, 0.1, 1.5),
            record("zeta", 10, 0.4, 1.0),
            record("alpha", 10, 0.3, 1.2),
        ];

        let set = SeriesSet::group(&records, XAxis::Grid);

        assert_eq!(set.len(), 2);
        assert_eq!(set.series[0].machine, "alpha");
        assert_eq!(set.series[0].points, vec![(10.0, 1.2), (20.0, 1.5)]);
        assert_eq!(set.series[1].machine, "zeta");
        assert_eq!(set.series[1].points, vec![(10.0, 1.0), (40.0, 3.0)]);
        assert_eq!(set.point_count(), 4);
    }

    #[test]
    fn test_group_uses_selected_axis() {
        let records = vec![record("m", 40, 0.2, 3.0), record("m", 10, 0.4, 1.0)];
        let set = SeriesSet::group(&records, XAxis::Rho);
        assert_eq!(set.series[0].points, vec![(0.2, 3.0), (0.4, 1.0)]);
    }

    #[test]
    fn test_equal_x_sorted_by_speedup() {
        let records = vec![record("m", 10, 0.1, 2.0), record("m", 10, 0.1, 1.0)];
        let set = SeriesSet::group(&records, XAxis::Grid);
        assert_eq!(set.series[0].points, vec![(10.0, 1.0), (10.0, 2.0)]);
    }

    #[test]
    fn test_legend_only_for_several_series() {
        let one = SeriesSet::group(&[record("a", 1, 0.1, 1.0)], XAxis::Grid);
        assert!(!one.show_legend());

        let two = SeriesSet::group(&[record("a", 1, 0.1, 1.0), record("b", 1, 0.1, 1.0)], XAxis::Grid);
        assert!(two.show_legend());
    }

    #[test]
    fn test_bounds_padding() {
        let set = SeriesSet::group(
            &[record("a", 0, 0.0, 1.0), record("a", 100, 0.0, 5.0)],
            XAxis::Grid,
        );
        let b = set.bounds(0.05);
        assert!((b.x_min + 5.0).abs() < 1e-9);
        assert!((b.x_max - 105.0).abs() < 1e-9);
        assert!((b.y_min - 0.8).abs() < 1e-9);
        assert!((b.y_max - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_empty_and_degenerate() {
        assert_eq!(SeriesSet::default().bounds(0.05), Bounds::default());

        let set = SeriesSet::group(&[record("a", 8, 0.0, 2.0)], XAxis::Grid);
        let b = set.bounds(0.05);
        assert_eq!((b.x_min, b.x_max), (7.5, 8.5));
        assert_eq!((b.y_min, b.y_max), (1.5, 2.5));
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let set = SeriesSet::group(
            &[record("a", 1, 0.0, f64::NAN), record("a", 2, 0.0, 1.0), record("a", 3, 0.0, 3.0)],
            XAxis::Grid,
        );
        let b = set.bounds(0.0);
        assert_eq!((b.x_min, b.x_max), (2.0, 3.0));
        assert_eq!((b.y_min, b.y_max), (1.0, 3.0));
    }

    #[test]
    fn test_bounds_stay_finite_for_huge_values() {
        let set = SeriesSet::group(
            &[record("a", 10, 0.0, 1e308), record("a", 20, 0.0, -1e308)],
            XAxis::Grid,
        );
        let b = set.bounds(0.05);
        assert!(b.y_min.is_finite() && b.y_max.is_finite());
        assert!((b.y_max - b.y_min).is_finite());
        assert!(b.y_min < 0.0 && b.y_max > 0.0);
        assert!((b.x_min - 9.5).abs() < 1e-9);
        assert!((b.x_max - 20.5).abs() < 1e-9);
    }

    #[test]
    fn test_padding_skipped_when_it_would_overflow() {
        let set = SeriesSet::group(
            &[record("a", 1, 0.0, 0.0), record("a", 2, 0.0, 1.7e308)],
            XAxis::Grid,
        );
        let b = set.bounds(0.5);
        assert_eq!((b.y_min, b.y_max), (0.0, 1.7e308));
    }

    #[test]
    fn test_series_bounds() {
        let set = SeriesSet::group(
            &[record("a", 1, 0.0, 1.0), record("a", 2, 0.0, 2.0), record("b", 50, 0.0, 9.0)],
            XAxis::Grid,
        );
        let b = set.series_bounds(0, 0.0);
        assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (1.0, 2.0, 1.0, 2.0));
        assert_eq!(set.series_bounds(7, 0.0), Bounds::default());
    }
}
