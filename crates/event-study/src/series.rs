// File: crates/event-study/src/series.rs
// Summary: Daily price series keyed by trading date.
// Invariants: strictly ascending dates, no duplicates, every record has a close.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::ops::RangeBounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRecord {
    pub close: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<f64>,
}

impl PriceRecord {
    pub fn close_only(close: f64) -> Self {
        Self { close, open: None, high: None, low: None, adj_close: None, volume: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSeries {
    rows: BTreeMap<NaiveDate, PriceRecord>,
}

impl PriceSeries {
    pub fn new() -> Self { Self::default() }

    /// Build from (date, close) pairs; a later duplicate date replaces an earlier one.
    pub fn from_closes(closes: impl IntoIterator<Item = (NaiveDate, f64)>) -> Self {
        closes.into_iter().map(|(d, c)| (d, PriceRecord::close_only(c))).collect()
    }

    pub fn insert(&mut self, date: NaiveDate, record: PriceRecord) -> Option<PriceRecord> {
        self.rows.insert(date, record)
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn get(&self, date: NaiveDate) -> Option<&PriceRecord> { self.rows.get(&date) }

    pub fn first_date(&self) -> Option<NaiveDate> { self.rows.keys().next().copied() }
    pub fn last_date(&self) -> Option<NaiveDate> { self.rows.keys().next_back().copied() }

    /// Latest entry on or before `date`.
    pub fn at_or_before(&self, date: NaiveDate) -> Option<(NaiveDate, &PriceRecord)> {
        self.rows.range(..=date).next_back().map(|(d, r)| (*d, r))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, &PriceRecord)> + '_ {
        self.rows.iter().map(|(d, r)| (*d, r))
    }

    pub fn dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ { self.rows.keys().copied() }

    pub fn closes(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, f64)> + '_ {
        self.rows.iter().map(|(d, r)| (*d, r.close))
    }

    /// Contiguous sub-series over `range` (copied).
    pub fn slice(&self, range: impl RangeBounds<NaiveDate>) -> Self {
        Self { rows: self.rows.range(range).map(|(d, r)| (*d, *r)).collect() }
    }
}

impl FromIterator<(NaiveDate, PriceRecord)> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, PriceRecord)>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}
