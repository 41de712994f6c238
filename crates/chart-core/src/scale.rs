// File: crates/chart-core/src/scale.rs
// Summary: Linear data <-> pixel transforms for the plot area.

use crate::geometry::RectI32;
use crate::view::ViewState;

/// Maps the data interval [d0, d1] onto the pixel interval [p0, p1].
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.d0 + ((px - self.p0) / (self.p1 - self.p0)) as f64 * (self.d1 - self.d0)
    }
}

/// X and Y scales for one plot rectangle. Y grows upwards in data space.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub plot: RectI32,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Viewport {
    pub fn new(plot: RectI32, view: &ViewState) -> Self {
        Self {
            plot,
            x: LinearScale::new(view.x_min, view.x_max, plot.left as f32, plot.right as f32),
            y: LinearScale::new(view.y_min, view.y_max, plot.bottom as f32, plot.top as f32),
        }
    }
    #[inline]
    pub fn to_px(&self, p: (f64, f64)) -> (f32, f32) { (self.x.to_px(p.0), self.y.to_px(p.1)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_corners_and_inverts() {
        let view = ViewState { x_min: 0.0, x_max: 10.0, y_min: 100.0, y_max: 200.0 };
        let vp = Viewport::new(RectI32::from_ltrb(50, 20, 150, 220), &view);
        assert_eq!(vp.to_px((0.0, 100.0)), (50.0, 220.0));
        assert_eq!(vp.to_px((10.0, 200.0)), (150.0, 20.0));
        assert!((vp.x.from_px(100.0) - 5.0).abs() < 1e-6);
        assert!((vp.y.from_px(120.0) - 150.0).abs() < 1e-4);
    }
}
