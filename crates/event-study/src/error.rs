// File: crates/event-study/src/error.rs
// Summary: Error kinds for loading, resolution and configuration. All are fatal to a run.

use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read price file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("line {line}: unparseable date '{value}'")]
    InvalidDate { line: u64, value: String },
    #[error("line {line}: unparseable {column} value '{value}'")]
    InvalidNumber { line: u64, column: String, value: String },
}

/// The requested date precedes every date in the series.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no price on or before {date} ({})", describe_start(.first))]
pub struct NoPriorPriceError {
    pub date: NaiveDate,
    pub first: Option<NaiveDate>,
}

fn describe_start(first: &Option<NaiveDate>) -> String {
    match first {
        Some(d) => format!("series starts {d}"),
        None => "series is empty".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("event '{label}': invalid date '{value}' (expected YYYY-MM-DD)")]
    EventDate { label: String, value: String },
    #[error("event '{label}': {source}")]
    EventMarker {
        label: String,
        #[source]
        source: chart_core::ParseMarkerError,
    },
    #[error("{field}: {source}")]
    Color {
        field: String,
        #[source]
        source: chart_core::ParseColorError,
    },
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    NoPriorPrice(#[from] NoPriorPriceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
