// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for figure construction and rendering.

pub mod chart;
pub mod figure;
pub mod trace;
pub mod marker;
pub mod color;
pub mod axis;
pub mod ticks;
pub mod time;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod hover;

pub use chart::{Chart, RenderOptions, plot_rect, viewport};
pub use figure::{Figure, Layout, Legend, Orientation, TraceOrder};
pub use trace::{LineStyle, MarkerStyle, Point, Trace, TraceMode};
pub use marker::{MarkerShape, MarkerSymbol, ParseMarkerError};
pub use color::{ParseColorError, Rgba};
pub use axis::{Axis, AxisKind, TickFormat};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use hover::{hit_test, Hover};
pub use time::{date_to_x, x_to_date};
