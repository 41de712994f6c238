// File: crates/event-study/src/split.rs
// Summary: Split a series into the [start, cutoff) and [cutoff, ..) display ranges.

use chrono::NaiveDate;
use tracing::debug;

use crate::series::PriceSeries;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeSplit {
    pub before: PriceSeries,
    pub after: PriceSeries,
}

/// Rows before `start` are left out. An inverted window (`start > cutoff`)
/// gives an empty `before`.
pub fn split_at(series: &PriceSeries, start: NaiveDate, cutoff: NaiveDate) -> RangeSplit {
    let before = if start < cutoff { series.slice(start..cutoff) } else { PriceSeries::new() };
    let after = series.slice(cutoff..);
    debug!(before = before.len(), after = after.len(), %cutoff, "split series");
    RangeSplit { before, after }
}
