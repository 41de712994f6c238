// File: crates/chart-core/src/axis.rs
// Summary: Axis model with titles, ranges, grid styling and tick formats.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    /// Values are days since 1970-01-01 (see `time::date_to_x`).
    Date,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Auto,
    Fixed(usize),
    /// `$` prefix, thousands separators, fixed decimals (plotly `$,.2f`).
    Currency(usize),
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub kind: AxisKind,
    pub tick_format: TickFormat,
    /// Explicit visible range; `None` means autoscale to the data.
    pub range: Option<(f64, f64)>,
    pub show_grid: bool,
    pub grid_color: Rgba,
    pub zero_line: bool,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: AxisKind::Linear,
            tick_format: TickFormat::Auto,
            range: None,
            show_grid: true,
            grid_color: Rgba::rgb(230, 230, 235),
            zero_line: true,
        }
    }

    pub fn date(title: impl Into<String>) -> Self {
        let mut a = Self::new(title);
        a.kind = AxisKind::Date;
        a.tick_format = TickFormat::Date;
        a
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn default_x() -> Self { Self::date("Date") }

    pub fn default_y() -> Self { Self::new("Price") }
}
