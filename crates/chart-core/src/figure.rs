// File: crates/chart-core/src/figure.rs
// Summary: Figure = traces + layout (titles, axes, legend, backgrounds). Renderer-agnostic.

use crate::axis::Axis;
use crate::color::Rgba;
use crate::trace::Trace;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOrder {
    Normal,
    Reversed,
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub title: Option<String>,
    pub visible: bool,
    pub orientation: Orientation,
    pub trace_order: TraceOrder,
    /// Width reserved to the right of the plot area, in pixels.
    pub width: u32,
}

impl Default for Legend {
    fn default() -> Self {
        Self { title: None, visible: true, orientation: Orientation::Vertical, trace_order: TraceOrder::Normal, width: 300 }
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    pub plot_bgcolor: Rgba,
    pub paper_bgcolor: Rgba,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: WIDTH,
            height: HEIGHT,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: Legend::default(),
            plot_bgcolor: Rgba::WHITE,
            paper_bgcolor: Rgba::WHITE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self { Self { traces: Vec::new(), layout } }

    pub fn add_trace(&mut self, trace: Trace) { self.traces.push(trace); }

    /// Traces that own a legend entry, in legend order.
    pub fn legend_entries(&self) -> Vec<&Trace> {
        let mut out: Vec<&Trace> = self.traces.iter().filter(|t| t.show_legend).collect();
        if self.layout.legend.trace_order == TraceOrder::Reversed { out.reverse(); }
        out
    }

    /// Data extents over all plotted points: (x_min, x_max, y_min, y_max).
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.traces.iter().flat_map(|t| t.present_points()).filter(|p| p.0.is_finite() && p.1.is_finite());
        let (x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(a, b, c, d), (x, y)| (a.min(x), b.max(x), c.min(y), d.max(y))))
    }
}
