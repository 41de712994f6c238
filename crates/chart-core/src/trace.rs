// File: crates/chart-core/src/trace.rs
// Summary: Trace model (line and marker traces) in data coordinates.
// Notes:
// - A point is `Option<(x, y)>`; `None` is a gap. A trace made only of gaps
//   plots nothing but can still own a legend entry.

use crate::color::Rgba;
use crate::marker::MarkerSymbol;

pub type Point = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceMode {
    Lines,
    Markers,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self { Self { color: Rgba::rgb(31, 119, 180), width: 2.0 } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub symbol: MarkerSymbol,
    /// Bounding box size in pixels.
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
    /// Outline stroke; open symbols are stroked in `color` instead.
    pub line: LineStyle,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            symbol: MarkerSymbol::default(),
            size: 8.0,
            color: Rgba::rgb(31, 119, 180),
            opacity: 1.0,
            line: LineStyle { color: Rgba::BLACK, width: 0.0 },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub points: Vec<Option<Point>>,
    pub line: LineStyle,
    pub marker: MarkerStyle,
    /// Tooltip text; lines separated by '\n'. Traces without it are not hoverable.
    pub hover_text: Option<String>,
    pub show_legend: bool,
    pub legend_group: Option<String>,
}

impl Trace {
    fn empty(name: impl Into<String>, mode: TraceMode) -> Self {
        Self {
            name: name.into(),
            mode,
            points: Vec::new(),
            line: LineStyle::default(),
            marker: MarkerStyle::default(),
            hover_text: None,
            show_legend: true,
            legend_group: None,
        }
    }

    /// Line trace over `data` (assumed sorted by x).
    pub fn line(name: impl Into<String>, data: impl IntoIterator<Item = Point>, line: LineStyle) -> Self {
        let mut t = Self::empty(name, TraceMode::Lines);
        t.points = data.into_iter().map(Some).collect();
        t.line = line;
        t
    }

    pub fn markers(name: impl Into<String>, data: impl IntoIterator<Item = Point>, marker: MarkerStyle) -> Self {
        let mut t = Self::empty(name, TraceMode::Markers);
        t.points = data.into_iter().map(Some).collect();
        t.marker = marker;
        t
    }

    /// Marker trace with a single null point: shows up in the legend, draws nothing.
    pub fn legend_only(name: impl Into<String>, marker: MarkerStyle) -> Self {
        let mut t = Self::empty(name, TraceMode::Markers);
        t.points = vec![None];
        t.marker = marker;
        t
    }

    pub fn with_hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_legend_group(mut self, group: impl Into<String>) -> Self {
        self.legend_group = Some(group.into());
        self
    }

    /// Non-null points in order.
    pub fn present_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().flatten().copied()
    }

    pub fn is_plotted(&self) -> bool { self.points.iter().any(Option::is_some) }
}
