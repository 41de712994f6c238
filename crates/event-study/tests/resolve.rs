// File: crates/event-study/tests/resolve.rs
// Purpose: As-of lookup: exact hits, fallback to the previous trading day, nothing before the first date.

use chrono::{Duration, NaiveDate};
use event_study::{resolve_as_of, PriceSeries};
use quickcheck_macros::quickcheck;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
}

#[test]
fn single_row_answers_later_dates() {
    let s = PriceSeries::from_closes([(day(0), 100.0)]);
    let p = resolve_as_of(&s, day(4)).unwrap();
    assert_eq!(p.close, 100.0);
    assert_eq!(p.matched, day(0));
    assert_eq!(p.requested, day(4));
}

#[test]
fn before_first_date_fails() {
    let s = PriceSeries::from_closes([(day(0), 100.0), (day(1), 101.0)]);
    let err = resolve_as_of(&s, day(-1)).unwrap_err();
    assert_eq!(err.date, day(-1));
    assert_eq!(err.first, Some(day(0)));
    assert!(err.to_string().contains("2019-12-31"));
}

#[test]
fn picks_nearest_earlier_not_nearest() {
    let s = PriceSeries::from_closes([(day(0), 1.0), (day(9), 2.0)]);
    assert_eq!(resolve_as_of(&s, day(8)).unwrap().close, 1.0);
}

/// Sparse series from arbitrary (offset, price) pairs.
fn series(points: &[(u8, u16)]) -> PriceSeries {
    PriceSeries::from_closes(points.iter().map(|&(o, p)| (day(o as i64), p as f64)))
}

#[quickcheck]
fn present_dates_resolve_exactly(points: Vec<(u8, u16)>) -> bool {
    let s = series(&points);
    s.closes().all(|(d, c)| {
        let p = resolve_as_of(&s, d).unwrap();
        p.matched == d && p.close == c
    })
}

#[quickcheck]
fn absent_dates_resolve_to_latest_earlier(points: Vec<(u8, u16)>, query: u8) -> bool {
    let s = series(&points);
    let q = day(query as i64);
    let expected = s.closes().filter(|(d, _)| *d <= q).last();
    match (resolve_as_of(&s, q), expected) {
        (Ok(p), Some((d, c))) => p.matched == d && p.close == c && p.matched <= q,
        (Err(e), None) => e.date == q,
        _ => false,
    }
}
