// File: crates/chart-core/src/time.rs
// Summary: Mapping between calendar dates and the f64 x coordinate of date axes.

use chrono::{Duration, NaiveDate};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Days since 1970-01-01.
pub fn date_to_x(date: NaiveDate) -> f64 {
    (date - epoch()).num_days() as f64
}

/// Inverse of `date_to_x`, truncating fractional days. `None` outside chrono's range.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() { return None; }
    epoch().checked_add_signed(Duration::try_days(x.floor() as i64)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_zero_and_roundtrips() {
        let d = NaiveDate::from_ymd_opt(2020, 3, 23).unwrap();
        assert_eq!(date_to_x(epoch()), 0.0);
        assert_eq!(x_to_date(date_to_x(d)), Some(d));
        assert_eq!(x_to_date(date_to_x(d) + 0.7), Some(d));
        assert_eq!(x_to_date(f64::NAN), None);
    }
}
