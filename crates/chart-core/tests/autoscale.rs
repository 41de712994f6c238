// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate view extents over mixed line/marker traces, gaps and explicit ranges.

use chart_core::{Axis, Figure, LineStyle, MarkerStyle, Trace, ViewState};

fn mixed() -> Figure {
    let mut fig = Figure::default();
    fig.add_trace(Trace::line("a", vec![(0.0, 1.0), (5.0, 3.0)], LineStyle::default()));
    fig.add_trace(Trace::markers("b", vec![(2.0, 6.0), (3.0, 1.5)], MarkerStyle::default()));
    // legend-only trace must not influence extents
    fig.add_trace(Trace::legend_only("c", MarkerStyle::default()));
    fig
}

#[test]
fn autoscale_mixed_traces() {
    let view = ViewState::from_figure(&mixed());
    assert_eq!(view.x_min, 0.0);
    assert_eq!(view.x_max, 5.0);
    // 2% margin around [1.0, 6.0]
    assert!((view.y_min - 0.9).abs() < 1e-9);
    assert!((view.y_max - 6.1).abs() < 1e-9);
}

#[test]
fn explicit_axis_range_wins() {
    let mut fig = mixed();
    fig.layout.y_axis = Axis::new("Y").with_range(-10.0, 10.0);
    let view = ViewState::from_figure(&fig);
    assert_eq!((view.y_min, view.y_max), (-10.0, 10.0));
    assert_eq!((view.x_min, view.x_max), (0.0, 5.0));
}

#[test]
fn empty_figure_gets_unit_view() {
    let view = ViewState::from_figure(&Figure::default());
    assert!(view.x_max > view.x_min && view.y_max > view.y_min);
}

#[test]
fn zoom_keeps_cursor_point_fixed() {
    let fig = mixed();
    let plot = chart_core::geometry::RectI32::from_ltrb(0, 0, 100, 100);
    let mut view = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
    view.zoom_at_pixel(0.5, 50.0, 50.0, &plot);
    assert!((view.x_min - 2.5).abs() < 1e-9 && (view.x_max - 7.5).abs() < 1e-9);
    assert!((view.y_min - 2.5).abs() < 1e-9 && (view.y_max - 7.5).abs() < 1e-9);

    view.pan_by_pixels(10.0, 0.0, &plot);
    assert!((view.x_min - 2.0).abs() < 1e-9);

    assert!(view.autoscale_y_visible(&fig));
    // visible x in [2, 7]: y spans 1.5..6.0
    assert!(view.y_min < 1.5 && view.y_max > 6.0);
}
