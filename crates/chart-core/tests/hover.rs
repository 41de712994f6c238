// File: crates/chart-core/tests/hover.rs
// Purpose: Hit-testing finds hoverable markers under the pointer and ignores everything else.

use chart_core::{hit_test, viewport, Figure, LineStyle, MarkerStyle, RenderOptions, Trace};

fn figure() -> Figure {
    let mut fig = Figure::default();
    fig.add_trace(Trace::line("line", vec![(0.0, 0.0), (10.0, 10.0)], LineStyle::default()));
    let m = MarkerStyle { size: 14.0, ..MarkerStyle::default() };
    fig.add_trace(Trace::markers("near", vec![(5.0, 5.0)], m).with_hover_text("near\nline two"));
    fig.add_trace(Trace::markers("silent", vec![(2.0, 2.0)], m));
    fig.add_trace(Trace::legend_only("legend", m).with_hover_text("never"));
    fig
}

#[test]
fn finds_marker_under_pointer() {
    let fig = figure();
    let opts = RenderOptions::for_figure(&fig);
    let (px, py) = viewport(&fig, &opts).to_px((5.0, 5.0));
    let hit = hit_test(&fig, &opts, px + 3.0, py - 3.0).expect("hit");
    assert_eq!(hit.trace_index, 1);
    assert_eq!(hit.text, "near\nline two");
    assert_eq!(hit.anchor, (px, py));
}

#[test]
fn ignores_markers_without_hover_text_and_far_pointer() {
    let fig = figure();
    let opts = RenderOptions::for_figure(&fig);
    let vp = viewport(&fig, &opts);
    let (px, py) = vp.to_px((2.0, 2.0));
    assert!(hit_test(&fig, &opts, px, py).is_none());
    let (px, py) = vp.to_px((5.0, 5.0));
    assert!(hit_test(&fig, &opts, px + 40.0, py).is_none());
    // outside the plot area
    assert!(hit_test(&fig, &opts, 1.0, 1.0).is_none());
}
