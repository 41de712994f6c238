// File: crates/chart-core/src/ticks.rs
// Summary: Tick placement (nice linear steps, calendar-aligned date steps) and label formatting.

use chrono::{Datelike, NaiveDate};

use crate::axis::TickFormat;
use crate::time::{date_to_x, x_to_date};

/// Ticks at 1/2/5 x 10^k steps covering [min, max], aiming for about `target` ticks.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min { return vec![min]; }
    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + step * 1e-9 || k > 1000 { break; }
        // snap away float noise like 0.30000000000000004
        out.push((v / step).round() * step);
        k += 1;
    }
    out
}

/// Smallest 1/2/5 x 10^k step >= `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DateStep {
    Days(i64),
    Months(i32),
    Years(i32),
}

impl DateStep {
    fn approx_days(self) -> f64 {
        match self {
            DateStep::Days(n) => n as f64,
            DateStep::Months(n) => n as f64 * 30.44,
            DateStep::Years(n) => n as f64 * 365.25,
        }
    }
}

const DATE_STEPS: &[DateStep] = &[
    DateStep::Days(1),
    DateStep::Days(2),
    DateStep::Days(7),
    DateStep::Days(14),
    DateStep::Months(1),
    DateStep::Months(3),
    DateStep::Months(6),
    DateStep::Years(1),
    DateStep::Years(2),
    DateStep::Years(5),
    DateStep::Years(10),
    DateStep::Years(25),
    DateStep::Years(50),
    DateStep::Years(100),
];

/// Calendar-aligned ticks on a date axis with their labels.
pub fn date_ticks(min_x: f64, max_x: f64, target: usize) -> Vec<(f64, String)> {
    let (Some(lo), Some(hi)) = (x_to_date(min_x.ceil()), x_to_date(max_x.floor())) else { return Vec::new(); };
    if hi < lo { return Vec::new(); }
    let span = max_x - min_x;
    let step = DATE_STEPS
        .iter()
        .copied()
        .find(|s| span / s.approx_days() <= target.max(1) as f64)
        .unwrap_or(DateStep::Years(100));

    let dates: Vec<NaiveDate> = match step {
        DateStep::Days(n) => {
            let start = date_to_x(lo) as i64;
            let aligned = start + (n - start.rem_euclid(n)) % n;
            (0..)
                .map(|k| aligned + k * n)
                .map_while(|x| x_to_date(x as f64).filter(|d| *d <= hi))
                .collect()
        }
        DateStep::Months(n) => {
            let months0 = lo.year() * 12 + lo.month0() as i32;
            let aligned = months0 + (n - months0.rem_euclid(n)) % n;
            let first = if lo.day() == 1 && months0 % n == 0 { months0 } else if months0 % n == 0 { months0 + n } else { aligned };
            (0..)
                .map(|k| first + k * n)
                .map_while(|m| NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1).filter(|d| *d <= hi))
                .collect()
        }
        DateStep::Years(n) => {
            let y0 = lo.year();
            let first = if lo.ordinal() == 1 && y0.rem_euclid(n) == 0 { y0 } else { y0 + (n - y0.rem_euclid(n)) };
            (0..)
                .map(|k| first + k * n)
                .map_while(|y| NaiveDate::from_ymd_opt(y, 1, 1).filter(|d| *d <= hi))
                .collect()
        }
    };

    let fmt = match step {
        DateStep::Days(_) => "%b %d",
        DateStep::Months(_) => "%b %Y",
        DateStep::Years(_) => "%Y",
    };
    dates.into_iter().map(|d| (date_to_x(d), d.format(fmt).to_string())).collect()
}

/// Format a tick value; `step` is the tick spacing (used by `Auto`).
pub fn format_value(v: f64, fmt: TickFormat, step: f64) -> String {
    match fmt {
        TickFormat::Auto => {
            let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10()).ceil() as usize };
            format!("{:.*}", decimals, v)
        }
        TickFormat::Fixed(d) => format!("{:.*}", d, v),
        TickFormat::Currency(d) => format_currency(v, d),
        TickFormat::Date => x_to_date(v).map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
    }
}

/// `$1,234.56` style; negative values get a leading minus.
pub fn format_currency(v: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, day).unwrap() }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(0.13), 0.2);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(20.0), 20.0);
    }

    #[test]
    fn linear_ticks_cover_range() {
        let t = linear_ticks(0.0, 100.0, 5);
        assert_eq!(t, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let t = linear_ticks(23.5, 181.2, 6);
        assert!(t.first().copied().unwrap() >= 23.5);
        assert!(t.last().copied().unwrap() <= 181.2);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn yearly_ticks_for_multi_year_span() {
        let ticks = date_ticks(date_to_x(d(2015, 1, 2)), date_to_x(d(2023, 12, 29)), 10);
        let labels: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023"]);
    }

    #[test]
    fn monthly_ticks_are_first_of_month() {
        let ticks = date_ticks(date_to_x(d(2020, 1, 15)), date_to_x(d(2020, 6, 30)), 8);
        assert_eq!(ticks.first().map(|t| t.1.as_str()), Some("Feb 2020"));
        for (x, _) in &ticks {
            assert_eq!(x_to_date(*x).unwrap().day(), 1);
        }
    }

    #[test]
    fn currency_format() {
        assert_eq!(format_currency(1234.5, 2), "$1,234.50");
        assert_eq!(format_currency(12.0, 2), "$12.00");
        assert_eq!(format_currency(-1234567.891, 2), "-$1,234,567.89");
        assert_eq!(format_currency(-0.001, 2), "$0.00");
        assert_eq!(format_value(150.0, TickFormat::Currency(2), 50.0), "$150.00");
        assert_eq!(format_value(0.25, TickFormat::Auto, 0.05), "0.25");
    }
}
