//! Dashboard figures derived from stored records.
//!
//! Everything here is a pure function over record slices; handlers in
//! `services::dashboard` load the records and serialize the results.

pub mod comparison;
pub mod ledger;
pub mod tanks;
pub mod volumes;

/// Rounds to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Day-over-day change in percent, two decimals.
///
/// With nothing to compare against the change is 100 when there is activity
/// now and 0 otherwise.
pub(crate) fn change_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        round2((current - previous) / previous * 100.0)
    }
}
