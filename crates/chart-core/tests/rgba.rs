// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Chart, Figure, LineStyle, RenderOptions, Rgba, Trace};

#[test]
fn render_rgba8_buffer() {
    let mut fig = Figure::default();
    fig.layout.paper_bgcolor = Rgba::rgb(211, 211, 211);
    fig.layout.legend.visible = false;
    fig.add_trace(Trace::line("diag", vec![(0.0, 0.0), (4.0, 4.0)], LineStyle::default()));

    let mut opts = RenderOptions::for_figure(&fig);
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = Chart::new().render_to_rgba8(&fig, &opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is paper background, fully opaque
    assert_eq!(&px[0..4], &[211, 211, 211, 255]);
}
