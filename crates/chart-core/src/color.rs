// File: crates/chart-core/src/color.rs
// Summary: Backend-neutral RGBA color with CSS-name and hex parsing.

use skia_safe as skia;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}' (expected a CSS color name or #rrggbb)")]
pub struct ParseColorError(pub String);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Same color with alpha scaled by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self { a: (self.a as f32 * o).round() as u8, ..self }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    /// Look up one of the CSS named colors used by chart styling.
    pub fn named(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        NAMED.iter().find(|(n, _)| *n == lower).map(|&(_, c)| c)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            return match hex.len() {
                6 => match (byte(0), byte(2), byte(4)) {
                    (Some(r), Some(g), Some(b)) => Ok(Rgba::rgb(r, g, b)),
                    _ => Err(ParseColorError(s.to_string())),
                },
                8 => match (byte(0), byte(2), byte(4), byte(6)) {
                    (Some(r), Some(g), Some(b), Some(a)) => Ok(Rgba::rgba(r, g, b, a)),
                    _ => Err(ParseColorError(s.to_string())),
                },
                _ => Err(ParseColorError(s.to_string())),
            };
        }
        Rgba::named(t).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

const NAMED: &[(&str, Rgba)] = &[
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("darkblue", Rgba::rgb(0, 0, 139)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("pink", Rgba::rgb(255, 192, 203)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("brown", Rgba::rgb(165, 42, 42)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("darkgrey", Rgba::rgb(169, 169, 169)),
    ("darkgray", Rgba::rgb(169, 169, 169)),
    ("lightgrey", Rgba::rgb(211, 211, 211)),
    ("lightgray", Rgba::rgb(211, 211, 211)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("gold", Rgba::rgb(255, 215, 0)),
    ("olive", Rgba::rgb(128, 128, 0)),
    ("maroon", Rgba::rgb(128, 0, 0)),
    ("lime", Rgba::rgb(0, 255, 0)),
    ("darkgreen", Rgba::rgb(0, 100, 0)),
    ("darkred", Rgba::rgb(139, 0, 0)),
    ("indigo", Rgba::rgb(75, 0, 130)),
    ("violet", Rgba::rgb(238, 130, 238)),
    ("salmon", Rgba::rgb(250, 128, 114)),
    ("steelblue", Rgba::rgb(70, 130, 180)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!("lightgrey".parse::<Rgba>().unwrap(), Rgba::rgb(211, 211, 211));
        assert_eq!(" Teal ".parse::<Rgba>().unwrap(), Rgba::rgb(0, 128, 128));
        assert_eq!("#1f77b4".parse::<Rgba>().unwrap(), Rgba::rgb(0x1f, 0x77, 0xb4));
        assert_eq!("#00000080".parse::<Rgba>().unwrap().a, 0x80);
        assert!("chartreuse-ish".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(Rgba::BLACK.with_opacity(0.8).a, 204);
        assert_eq!(Rgba::BLACK.with_opacity(2.0).a, 255);
    }
}
