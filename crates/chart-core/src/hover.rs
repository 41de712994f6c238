// File: crates/chart-core/src/hover.rs
// Summary: Pointer hit-testing against marker traces for tooltips.

use crate::chart::{viewport, RenderOptions};
use crate::color::Rgba;
use crate::figure::Figure;
use crate::geometry::distance;
use crate::trace::TraceMode;

/// Extra pick radius beyond the marker's own half-size, in pixels.
const PICK_SLOP_PX: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub trace_index: usize,
    /// Marker centre in pixels.
    pub anchor: (f32, f32),
    pub text: String,
    pub color: Rgba,
}

/// Nearest hoverable marker under (px, py), if any. Gaps and traces without
/// hover text are never hit.
pub fn hit_test(fig: &Figure, opts: &RenderOptions, px: f32, py: f32) -> Option<Hover> {
    let vp = viewport(fig, opts);
    if !vp.plot.contains(px, py) { return None; }
    let mut best: Option<(f32, Hover)> = None;
    for (i, t) in fig.traces.iter().enumerate() {
        let Some(text) = t.hover_text.as_deref() else { continue };
        if t.mode != TraceMode::Markers { continue; }
        let radius = t.marker.size * 0.5 + PICK_SLOP_PX;
        for p in t.present_points() {
            let c = vp.to_px(p);
            let d = distance(c, (px, py));
            if d <= radius && best.as_ref().map_or(true, |(bd, _)| d < *bd) {
                best = Some((d, Hover { trace_index: i, anchor: c, text: text.to_string(), color: t.marker.color }));
            }
        }
    }
    best.map(|(_, h)| h)
}
