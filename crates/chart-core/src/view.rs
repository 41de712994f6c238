// File: crates/chart-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::figure::Figure;
use crate::geometry::RectI32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Visible ranges for `fig`: explicit axis ranges win, otherwise data extents
    /// (with a 2% margin on Y).
    pub fn from_figure(fig: &Figure) -> Self {
        let (mut x_min, mut x_max, mut y_min, mut y_max) = match fig.data_bounds() {
            Some(b) => b,
            None => (0.0, 1.0, 0.0, 1.0),
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        y_min -= ym;
        y_max += ym;
        if let Some((a, b)) = fig.layout.x_axis.range { x_min = a; x_max = b; }
        if let Some((a, b)) = fig.layout.y_axis.range { y_min = a; y_max = b; }
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_figure(&self, fig: &mut Figure) {
        fig.layout.x_axis.range = Some((self.x_min, self.x_max));
        fig.layout.y_axis.range = Some((self.y_min, self.y_max));
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, plot: &RectI32) {
        let plot_w = (plot.width() as f64).max(1.0);
        let plot_h = (plot.height() as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom keeping the data point under the cursor fixed. Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, plot: &RectI32) {
        let l = plot.left as f64; let rpx = plot.right as f64;
        let t = plot.top as f64; let bpx = plot.bottom as f64;
        let plot_w = (rpx - l).max(1.0); let plot_h = (bpx - t).max(1.0);
        let cx = cursor_x.clamp(l, rpx); let cy = cursor_y.clamp(t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }

    pub fn autoscale_y_visible(&mut self, fig: &Figure) -> bool {
        if let Some((ymin, ymax)) = visible_y_range(fig, self.x_min, self.x_max) {
            let m = ((ymax - ymin) * 0.02).max(1e-9);
            self.y_min = ymin - m;
            self.y_max = ymax + m;
            true
        } else { false }
    }
}

pub fn visible_y_range(fig: &Figure, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
    fig.traces
        .iter()
        .flat_map(|t| t.present_points())
        .filter(|&(x, y)| x >= x_min && x <= x_max && y.is_finite())
        .fold(None, |acc, (_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        })
}
