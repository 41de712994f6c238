// File: crates/chart-core/src/types.rs
// Summary: Default figure size and the margins reserved around the plot area.

/// Default figure width in pixels.
pub const WIDTH: i32 = 1200;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 800;

/// Margins around the plot area, in pixels. The top margin holds the title,
/// left and bottom hold tick labels plus axis titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Insets {
    fn default() -> Self {
        Self { left: 96, right: 24, top: 72, bottom: 64 }
    }
}
