// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test producing PNG bytes.

use chart_core::{
    Chart, Figure, Layout, LineStyle, MarkerShape, MarkerStyle, MarkerSymbol, RenderOptions, Rgba, Trace,
};

#[test]
fn render_smoke_png() {
    let mut layout = Layout::default();
    layout.title = "Smoke".into();
    layout.legend.title = Some("Events".into());
    let mut fig = Figure::new(layout);
    fig.add_trace(Trace::line(
        "close",
        vec![(18_000.0, 0.0), (18_001.0, 2.0), (18_002.0, 1.0), (18_003.0, 3.5), (18_004.0, 2.5)],
        LineStyle { color: Rgba::rgb(0, 0, 255), width: 2.0 },
    ));
    let marker = MarkerStyle {
        symbol: MarkerSymbol::open(MarkerShape::Star),
        size: 14.0,
        color: Rgba::rgb(255, 0, 0),
        opacity: 0.8,
        line: LineStyle { color: Rgba::BLACK, width: 2.0 },
    };
    fig.add_trace(Trace::markers("event", vec![(18_002.0, 1.2)], marker).with_show_legend(false).with_hover_text("event"));
    fig.add_trace(Trace::legend_only("event", marker));

    let opts = RenderOptions::for_figure(&fig);
    let bytes = Chart::new().render_to_png_bytes(&fig, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (opts.width as u32, opts.height as u32));
}
