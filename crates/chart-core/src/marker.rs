// File: crates/chart-core/src/marker.rs
// Summary: Marker symbols (plotly-style names) and their outline geometry in pixel space.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    Cross,
    X,
    Star,
    TriangleUp,
    TriangleDown,
    Hexagon,
    Octagon,
}

impl MarkerShape {
    pub const ALL: [MarkerShape; 10] = [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::Diamond,
        MarkerShape::Cross,
        MarkerShape::X,
        MarkerShape::Star,
        MarkerShape::TriangleUp,
        MarkerShape::TriangleDown,
        MarkerShape::Hexagon,
        MarkerShape::Octagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::Diamond => "diamond",
            MarkerShape::Cross => "cross",
            MarkerShape::X => "x",
            MarkerShape::Star => "star",
            MarkerShape::TriangleUp => "triangle-up",
            MarkerShape::TriangleDown => "triangle-down",
            MarkerShape::Hexagon => "hexagon",
            MarkerShape::Octagon => "octagon",
        }
    }
}

/// A marker shape plus whether it is drawn as an outline only (`-open`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerSymbol {
    pub shape: MarkerShape,
    pub open: bool,
}

impl MarkerSymbol {
    pub const fn filled(shape: MarkerShape) -> Self { Self { shape, open: false } }
    pub const fn open(shape: MarkerShape) -> Self { Self { shape, open: true } }
}

impl Default for MarkerSymbol {
    fn default() -> Self { Self::filled(MarkerShape::Circle) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown marker symbol '{0}'")]
pub struct ParseMarkerError(pub String);

impl FromStr for MarkerSymbol {
    type Err = ParseMarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (base, open) = match lower.strip_suffix("-open") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        MarkerShape::ALL
            .iter()
            .find(|shape| shape.name() == base)
            .map(|&shape| MarkerSymbol { shape, open })
            .ok_or_else(|| ParseMarkerError(s.to_string()))
    }
}

impl fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape.name())?;
        if self.open { f.write_str("-open")?; }
        Ok(())
    }
}

/// Closed polygon outline for `shape` centred on (cx, cy), fitting a box of `size` px.
/// Circles return `None`; the renderer draws them natively.
pub fn outline(shape: MarkerShape, cx: f32, cy: f32, size: f32) -> Option<Vec<(f32, f32)>> {
    let r = size * 0.5;
    let pts = match shape {
        MarkerShape::Circle => return None,
        MarkerShape::Square => {
            let h = r * 0.85;
            vec![(cx - h, cy - h), (cx + h, cy - h), (cx + h, cy + h), (cx - h, cy + h)]
        }
        MarkerShape::Diamond => vec![(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)],
        MarkerShape::Cross => {
            let w = r * 0.35;
            vec![
                (cx - w, cy - r), (cx + w, cy - r), (cx + w, cy - w), (cx + r, cy - w),
                (cx + r, cy + w), (cx + w, cy + w), (cx + w, cy + r), (cx - w, cy + r),
                (cx - w, cy + w), (cx - r, cy + w), (cx - r, cy - w), (cx - w, cy - w),
            ]
        }
        MarkerShape::X => {
            // the cross rotated by 45 degrees
            let cross = outline(MarkerShape::Cross, 0.0, 0.0, size)?;
            let (s, c) = (PI / 4.0).sin_cos();
            cross.into_iter().map(|(x, y)| (cx + x * c - y * s, cy + x * s + y * c)).collect()
        }
        MarkerShape::Star => {
            let inner = r * 0.45;
            (0..10)
                .map(|i| {
                    let rad = if i % 2 == 0 { r } else { inner };
                    let a = -PI / 2.0 + i as f32 * PI / 5.0;
                    (cx + rad * a.cos(), cy + rad * a.sin())
                })
                .collect()
        }
        MarkerShape::TriangleUp => vec![(cx, cy - r), (cx + r, cy + r * 0.75), (cx - r, cy + r * 0.75)],
        MarkerShape::TriangleDown => vec![(cx, cy + r), (cx - r, cy - r * 0.75), (cx + r, cy - r * 0.75)],
        MarkerShape::Hexagon => regular(cx, cy, r, 6, 0.0),
        MarkerShape::Octagon => regular(cx, cy, r, 8, PI / 8.0),
    };
    Some(pts)
}

fn regular(cx: f32, cy: f32, r: f32, n: usize, phase: f32) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let a = phase + i as f32 * 2.0 * PI / n as f32;
            (cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_variants() {
        let m: MarkerSymbol = "triangle-up-open".parse().unwrap();
        assert_eq!(m, MarkerSymbol::open(MarkerShape::TriangleUp));
        let m: MarkerSymbol = "X-Open".parse().unwrap();
        assert_eq!(m, MarkerSymbol::open(MarkerShape::X));
        assert_eq!("hexagon".parse::<MarkerSymbol>().unwrap(), MarkerSymbol::filled(MarkerShape::Hexagon));
        assert!("pentagon-open".parse::<MarkerSymbol>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for shape in MarkerShape::ALL {
            for sym in [MarkerSymbol::filled(shape), MarkerSymbol::open(shape)] {
                assert_eq!(sym.to_string().parse::<MarkerSymbol>().unwrap(), sym);
            }
        }
    }

    #[test]
    fn outlines_stay_inside_box() {
        for shape in MarkerShape::ALL {
            if let Some(pts) = outline(shape, 10.0, 10.0, 14.0) {
                assert!(pts.len() >= 3, "{shape:?}");
                for (x, y) in pts {
                    assert!((x - 10.0).abs() <= 7.0 + 1e-3 && (y - 10.0).abs() <= 7.0 + 1e-3, "{shape:?}");
                }
            }
        }
    }
}
