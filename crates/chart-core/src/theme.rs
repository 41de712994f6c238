// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (text, axes, tooltip, crosshair).
// Figure backgrounds and grid colors come from the layout; the theme only covers
// what the layout does not specify.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub title: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub legend_text: Rgba,
    pub crosshair: Rgba,
    pub tooltip_bg: Rgba,
    pub tooltip_text: Rgba,
    pub zero_line: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            title: Rgba::rgb(42, 63, 95),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick: Rgba::rgb(68, 68, 78),
            legend_text: Rgba::rgb(20, 20, 30),
            crosshair: Rgba::rgb(30, 120, 240),
            tooltip_bg: Rgba::rgba(255, 255, 255, 240),
            tooltip_text: Rgba::rgb(20, 20, 30),
            zero_line: Rgba::rgb(120, 120, 130),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            title: Rgba::rgb(235, 235, 245),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            legend_text: Rgba::rgb(220, 220, 230),
            crosshair: Rgba::rgb(255, 230, 70),
            tooltip_bg: Rgba::rgba(30, 30, 34, 240),
            tooltip_text: Rgba::rgb(235, 235, 245),
            zero_line: Rgba::rgb(110, 110, 120),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            title: Rgba::BLACK,
            axis_line: Rgba::BLACK,
            axis_label: Rgba::BLACK,
            tick: Rgba::BLACK,
            legend_text: Rgba::BLACK,
            crosshair: Rgba::rgb(255, 0, 255),
            tooltip_bg: Rgba::WHITE,
            tooltip_text: Rgba::BLACK,
            zero_line: Rgba::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
