//! Daily seed: the same calendar day always picks the same secret.

use chrono::{NaiveDate, Utc};

/// Source of "today". Injected so the seed can be tested without the wall clock.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// UTC calendar date, matching the day boundary of `Date.toISOString()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// `YYYY-MM-DD`
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Rolling `hash * 31 + c` over UTF-16 code units with 32-bit wraparound,
/// returned as an absolute value.
pub fn daily_hash(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in key.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Index of today's secret in a dictionary of `len` entries.
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    daily_hash(&date_key(date)) as usize % len
}
