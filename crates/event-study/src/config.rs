// File: crates/event-study/src/config.rs
// Summary: TOML configuration (data source, ranges, jitter, styling, event catalog).
// Every field has a default, so an empty file (or no file) reproduces the stock chart.

use chart_core::Rgba;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{default_event_specs, EventCatalog, EventSpec};
use crate::compose::ChartStyle;
use crate::error::ConfigError;
use crate::jitter::Jitter;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudyConfig {
    pub data: DataSource,
    pub ranges: RangeConfig,
    pub jitter: JitterConfig,
    pub style: StyleConfig,
    pub events: EventList,
}

/// Wrapper so a missing `[[events]]` table falls back to the stock catalog
/// while an explicit list (even an empty one) is taken as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventList(pub Vec<EventSpec>);

impl Default for EventList {
    fn default() -> Self { Self(default_event_specs()) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSource {
    pub path: PathBuf,
    pub date_column: String,
    pub close_column: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self { path: PathBuf::from("AAPL.csv"), date_column: "Date".into(), close_column: "Close".into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    /// First date of the "before" range; earlier rows are not drawn.
    pub start: NaiveDate,
    /// First date of the "after" range.
    pub cutoff: NaiveDate,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default(),
            cutoff: NaiveDate::from_ymd_opt(2020, 3, 23).unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JitterConfig {
    pub max_days: i64,
    pub max_price: f64,
    /// Fixed seed for reproducible placement; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for JitterConfig {
    fn default() -> Self { Self { max_days: 10, max_price: 0.03, seed: None } }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub before_name: String,
    pub after_name: String,
    pub before_color: String,
    pub after_color: String,
    pub line_width: f32,
    pub width: i32,
    pub height: i32,
    pub legend_title: String,
    pub legend_width: u32,
    pub marker_size: f32,
    pub marker_opacity: f32,
    pub marker_line_color: String,
    pub marker_line_width: f32,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub grid_color: String,
    pub show_grid: bool,
    pub zero_line: bool,
    pub price_decimals: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: "Apple Stock Close Price with Key Events (2015 - Present)".into(),
            x_title: "Date".into(),
            y_title: "Close Price (in USD)".into(),
            before_name: "Close Price up to March 2020".into(),
            after_name: "Close Price from March 2020 onward".into(),
            before_color: "blue".into(),
            after_color: "green".into(),
            line_width: 2.0,
            width: 1200,
            height: 800,
            legend_title: "Events".into(),
            legend_width: 320,
            marker_size: 14.0,
            marker_opacity: 0.8,
            marker_line_color: "black".into(),
            marker_line_width: 2.0,
            plot_bgcolor: "white".into(),
            paper_bgcolor: "lightgrey".into(),
            grid_color: "lightgrey".into(),
            show_grid: true,
            zero_line: false,
            price_decimals: 2,
        }
    }
}

fn color(field: &str, value: &str) -> Result<Rgba, ConfigError> {
    value.parse().map_err(|source| ConfigError::Color { field: field.to_string(), source })
}

impl StyleConfig {
    /// Parse colors and check sizes.
    pub fn resolve(&self) -> Result<ChartStyle, ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!("style: figure size {}x{} must be positive", self.width, self.height)));
        }
        if !(0.0..=1.0).contains(&self.marker_opacity) {
            return Err(ConfigError::Invalid(format!("style.marker_opacity {} must be within 0..=1", self.marker_opacity)));
        }
        if !(self.marker_size > 0.0) {
            return Err(ConfigError::Invalid(format!("style.marker_size {} must be positive", self.marker_size)));
        }
        Ok(ChartStyle {
            title: self.title.clone(),
            x_title: self.x_title.clone(),
            y_title: self.y_title.clone(),
            before_name: self.before_name.clone(),
            after_name: self.after_name.clone(),
            before_color: color("style.before_color", &self.before_color)?,
            after_color: color("style.after_color", &self.after_color)?,
            line_width: self.line_width,
            width: self.width,
            height: self.height,
            legend_title: self.legend_title.clone(),
            legend_width: self.legend_width,
            marker_size: self.marker_size,
            marker_opacity: self.marker_opacity,
            marker_line_color: color("style.marker_line_color", &self.marker_line_color)?,
            marker_line_width: self.marker_line_width,
            plot_bgcolor: color("style.plot_bgcolor", &self.plot_bgcolor)?,
            paper_bgcolor: color("style.paper_bgcolor", &self.paper_bgcolor)?,
            grid_color: color("style.grid_color", &self.grid_color)?,
            show_grid: self.show_grid,
            zero_line: self.zero_line,
            price_decimals: self.price_decimals,
        })
    }
}

impl StudyConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), events = cfg.events.0.len(), "loaded config");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: StudyConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check everything that can be checked without reading the data file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranges.start > self.ranges.cutoff {
            return Err(ConfigError::Invalid(format!(
                "ranges.start {} is after ranges.cutoff {}",
                self.ranges.start, self.ranges.cutoff
            )));
        }
        self.jitter()?;
        self.catalog()?;
        self.style.resolve()?;
        Ok(())
    }

    pub fn jitter(&self) -> Result<Jitter, ConfigError> {
        Jitter::new(self.jitter.max_days, self.jitter.max_price)
    }

    pub fn catalog(&self) -> Result<EventCatalog, ConfigError> {
        EventCatalog::from_specs(&self.events.0)
    }

    pub fn chart_style(&self) -> Result<ChartStyle, ConfigError> {
        self.style.resolve()
    }
}
