// File: crates/event-study/src/pipeline.rs
// Summary: One linear pass: load -> split -> resolve + jitter -> compose.

use chart_core::Figure;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::EventCatalog;
use crate::compose::{compose, ChartStyle};
use crate::config::StudyConfig;
use crate::error::{NoPriorPriceError, Result};
use crate::jitter::Jitter;
use crate::loader::load_csv;
use crate::resolve::{resolve_as_of, ResolvedEvent};
use crate::series::PriceSeries;
use crate::split::{split_at, RangeSplit};

/// Everything a run produced, kept for display and inspection.
#[derive(Clone, Debug)]
pub struct Study {
    pub series_len: usize,
    pub split: RangeSplit,
    pub resolved: Vec<ResolvedEvent>,
    pub figure: Figure,
}

/// Resolve every event against the full series and jitter its display position.
/// Stops at the first event with no prior price.
pub fn place_events<R: Rng>(
    series: &PriceSeries,
    catalog: &EventCatalog,
    jitter: &Jitter,
    rng: &mut R,
) -> Result<Vec<ResolvedEvent>, NoPriorPriceError> {
    catalog
        .iter()
        .map(|event| -> Result<ResolvedEvent, NoPriorPriceError> {
            let price = resolve_as_of(series, event.date)?;
            let display = jitter.apply(rng, event.date, price.close);
            debug!(label = %event.label, matched = %price.matched, close = price.close, "resolved event");
            Ok(ResolvedEvent { event: event.clone(), price, display })
        })
        .collect()
}

pub fn run<R: Rng>(config: &StudyConfig, rng: &mut R) -> Result<Study> {
    let series = load_csv(&config.data.path, &config.data)?;
    run_with_series(config, &series, rng)
}

/// Same as [`run`] with the series already loaded.
pub fn run_with_series<R: Rng>(config: &StudyConfig, series: &PriceSeries, rng: &mut R) -> Result<Study> {
    let catalog = config.catalog()?;
    let jitter = config.jitter()?;
    let style: ChartStyle = config.chart_style()?;

    let split = split_at(series, config.ranges.start, config.ranges.cutoff);
    let resolved = place_events(series, &catalog, &jitter, rng)?;
    let figure = compose(&split, &resolved, &style);
    info!(
        rows = series.len(),
        before = split.before.len(),
        after = split.after.len(),
        events = resolved.len(),
        traces = figure.traces.len(),
        "composed figure"
    );
    Ok(Study { series_len: series.len(), split, resolved, figure })
}
