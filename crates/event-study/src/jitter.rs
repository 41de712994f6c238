// File: crates/event-study/src/jitter.rs
// Summary: Random display offsets so markers on nearby dates do not stack.
// The RNG is always passed in; seed it for reproducible output.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::error::ConfigError;

/// Largest accepted day offset (about a century).
pub const MAX_DAYS: i64 = 36_500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    max_days: i64,
    max_price: f64,
}

impl Default for Jitter {
    fn default() -> Self { Self { max_days: 10, max_price: 0.03 } }
}

impl Jitter {
    pub fn new(max_days: i64, max_price: f64) -> Result<Self, ConfigError> {
        if !(0..=MAX_DAYS).contains(&max_days) {
            return Err(ConfigError::Invalid(format!("jitter.max_days {max_days} must be within 0..={MAX_DAYS}")));
        }
        // the sampled span is 2 * max_price and must stay finite
        if !(2.0 * max_price).is_finite() || max_price < 0.0 {
            return Err(ConfigError::Invalid(format!("jitter.max_price {max_price} must be a finite, non-negative number")));
        }
        Ok(Self { max_days, max_price })
    }

    /// No displacement at all.
    pub fn none() -> Self { Self { max_days: 0, max_price: 0.0 } }

    pub fn max_days(&self) -> i64 { self.max_days }
    pub fn max_price(&self) -> f64 { self.max_price }

    /// Shift `date` by a whole number of days in `[-max_days, max_days]` and
    /// `price` by a real offset in `[-max_price, max_price]`.
    pub fn apply<R: Rng>(&self, rng: &mut R, date: NaiveDate, price: f64) -> (NaiveDate, f64) {
        let days = if self.max_days > 0 { rng.gen_range(-self.max_days..=self.max_days) } else { 0 };
        let dp = if self.max_price > 0.0 { rng.gen_range(-self.max_price..=self.max_price) } else { 0.0 };
        let shifted = Duration::try_days(days).and_then(|d| date.checked_add_signed(d)).unwrap_or(date);
        (shifted, price + dp)
    }
}
