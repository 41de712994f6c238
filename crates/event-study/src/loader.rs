// File: crates/event-study/src/loader.rs
// Summary: CSV -> PriceSeries. Sort by date, forward-fill gaps, collapse duplicate dates.
// Notes:
// - Rows are sorted before filling so a gap always takes the chronologically
//   previous value, whatever order the file is in.
// - Duplicate dates keep the last row in (stable) sorted order.
// - Rows whose close is still missing after the fill (leading gaps) are dropped.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::DataSource;
use crate::error::LoadError;
use crate::series::{PriceRecord, PriceSeries};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const MISSING: &[&str] = &["", "null", "nan", "na", "n/a", "none"];

// Column slots in a raw row.
const CLOSE: usize = 0;
const OPEN: usize = 1;
const HIGH: usize = 2;
const LOW: usize = 3;
const ADJ_CLOSE: usize = 4;
const VOLUME: usize = 5;
const SLOTS: usize = 6;

type Cells = [Option<f64>; SLOTS];

pub fn load_csv(path: impl AsRef<Path>, source: &DataSource) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io { path: path.to_path_buf(), source: e })?;
    let series = load_from_reader(file, source)?;
    info!(path = %path.display(), rows = series.len(), "loaded price series");
    Ok(series)
}

pub fn load_from_reader<R: Read>(reader: R, source: &DataSource) -> Result<PriceSeries, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want { return Some(i); }
            }
        }
        None
    };
    let date_col = source.date_column.to_lowercase();
    let close_col = source.close_column.to_lowercase();
    let i_date = idx(&[date_col.as_str()]).ok_or_else(|| LoadError::MissingColumn(source.date_column.clone()))?;
    let i_close = idx(&[close_col.as_str()]).ok_or_else(|| LoadError::MissingColumn(source.close_column.clone()))?;

    let mut columns: [(Option<usize>, &str); SLOTS] = [(None, ""); SLOTS];
    columns[CLOSE] = (Some(i_close), source.close_column.as_str());
    columns[OPEN] = (idx(&["open"]), "Open");
    columns[HIGH] = (idx(&["high"]), "High");
    columns[LOW] = (idx(&["low"]), "Low");
    columns[ADJ_CLOSE] = (idx(&["adj close", "adj_close"]), "Adj Close");
    columns[VOLUME] = (idx(&["volume"]), "Volume");

    let mut rows: Vec<(NaiveDate, Cells)> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map_or(0, |p| p.line());
        let raw_date = rec.get(i_date).unwrap_or("");
        let date = parse_date(raw_date).ok_or_else(|| LoadError::InvalidDate { line, value: raw_date.to_string() })?;
        let mut cells: Cells = [None; SLOTS];
        for (slot, (col, name)) in columns.iter().enumerate() {
            let Some(ix) = *col else { continue };
            let raw = rec.get(ix).unwrap_or("");
            cells[slot] = parse_number(raw)
                .map_err(|_| LoadError::InvalidNumber { line, column: name.to_string(), value: raw.to_string() })?;
        }
        rows.push((date, cells));
    }
    debug!(rows = rows.len(), "read csv rows");

    if !rows.windows(2).all(|w| w[0].0 <= w[1].0) {
        debug!("rows out of date order; sorting before fill");
    }
    rows.sort_by_key(|(d, _)| *d);

    let filled = forward_fill(&mut rows);
    if filled > 0 {
        warn!(cells = filled, "forward-filled missing values from the previous trading day");
    }

    let mut by_date: BTreeMap<NaiveDate, Cells> = BTreeMap::new();
    let mut duplicates = 0usize;
    for (date, cells) in rows {
        if by_date.insert(date, cells).is_some() { duplicates += 1; }
    }
    if duplicates > 0 {
        warn!(dropped = duplicates, "duplicate dates; kept the last row for each");
    }

    let mut dropped = 0usize;
    let series: PriceSeries = by_date
        .into_iter()
        .filter_map(|(date, c)| {
            let Some(close) = c[CLOSE] else {
                dropped += 1;
                return None;
            };
            Some((date, PriceRecord {
                close,
                open: c[OPEN],
                high: c[HIGH],
                low: c[LOW],
                adj_close: c[ADJ_CLOSE],
                volume: c[VOLUME],
            }))
        })
        .collect();
    if dropped > 0 {
        warn!(dropped, "rows without any prior close were dropped");
    }
    Ok(series)
}

/// Fill each missing cell with the last value seen in its column; returns the number filled.
fn forward_fill(rows: &mut [(NaiveDate, Cells)]) -> usize {
    let mut last: Cells = [None; SLOTS];
    let mut filled = 0;
    for (_, cells) in rows.iter_mut() {
        for slot in 0..SLOTS {
            match cells[slot] {
                Some(v) => last[slot] = Some(v),
                None if last[slot].is_some() => {
                    cells[slot] = last[slot];
                    filled += 1;
                }
                None => {}
            }
        }
    }
    filled
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| DATETIME_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(s, f).ok()).map(|dt| dt.date()))
}

/// `Ok(None)` for a missing-value token, `Err` for anything else that is not a finite number.
fn parse_number(s: &str) -> Result<Option<f64>, ()> {
    let s = s.trim();
    if MISSING.iter().any(|m| s.eq_ignore_ascii_case(m)) { return Ok(None); }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats() {
        let want = NaiveDate::from_ymd_opt(2020, 3, 23).unwrap();
        for s in ["2020-03-23", "03/23/2020", "2020/03/23", "2020-03-23 16:00:00", "2020-03-23T16:00:00"] {
            assert_eq!(parse_date(s), Some(want), "{s}");
        }
        assert_eq!(parse_date("23.03.2020"), None);
    }

    #[test]
    fn missing_tokens() {
        for s in ["", " ", "null", "NaN", "NA", "n/a", "None"] {
            assert_eq!(parse_number(s), Ok(None), "{s}");
        }
        assert_eq!(parse_number("12.5"), Ok(Some(12.5)));
        assert!(parse_number("abc").is_err());
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn fill_counts_only_filled_cells() {
        let d = |n| NaiveDate::from_ymd_opt(2020, 1, n).unwrap();
        let mut rows = vec![
            (d(1), [None, None, None, None, None, None]),
            (d(2), [Some(1.0), None, None, None, None, None]),
            (d(3), [None, None, None, None, None, None]),
        ];
        assert_eq!(forward_fill(&mut rows), 1);
        assert_eq!(rows[0].1[CLOSE], None);
        assert_eq!(rows[2].1[CLOSE], Some(1.0));
    }
}
