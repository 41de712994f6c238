// File: crates/event-study/src/resolve.rs
// Summary: As-of price lookup (exact date, else the nearest earlier trading day).

use chrono::NaiveDate;

use crate::catalog::Event;
use crate::error::NoPriorPriceError;
use crate::series::PriceSeries;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsOfPrice {
    pub requested: NaiveDate,
    /// Trading date the close came from; never after `requested`.
    pub matched: NaiveDate,
    pub close: f64,
}

impl AsOfPrice {
    pub fn is_exact(&self) -> bool { self.matched == self.requested }
}

pub fn resolve_as_of(series: &PriceSeries, date: NaiveDate) -> Result<AsOfPrice, NoPriorPriceError> {
    series
        .at_or_before(date)
        .map(|(matched, rec)| AsOfPrice { requested: date, matched, close: rec.close })
        .ok_or(NoPriorPriceError { date, first: series.first_date() })
}

/// An event with its as-of price and jittered display position.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEvent {
    pub event: Event,
    pub price: AsOfPrice,
    pub display: (NaiveDate, f64),
}
