// File: crates/event-study/src/lib.rs
// Summary: Stock price event study: load a daily close series, place catalog events on it, compose the chart.

pub mod series;
pub mod loader;
pub mod split;
pub mod catalog;
pub mod resolve;
pub mod jitter;
pub mod compose;
pub mod config;
pub mod error;
pub mod pipeline;

pub use series::{PriceRecord, PriceSeries};
pub use loader::{load_csv, load_from_reader};
pub use split::{split_at, RangeSplit};
pub use catalog::{default_event_specs, Event, EventCatalog, EventSpec};
pub use resolve::{resolve_as_of, AsOfPrice, ResolvedEvent};
pub use jitter::Jitter;
pub use compose::{compose, hover_text, ChartStyle};
pub use config::{DataSource, JitterConfig, RangeConfig, StudyConfig, StyleConfig};
pub use error::{ConfigError, Error, LoadError, NoPriorPriceError, Result};
pub use pipeline::{place_events, run, run_with_series, Study};
