use std::collections::BTreeMap;

use chrono::{Datelike, Duration};

use crate::models::{DateRange, EarningsEvent};

/// Group events by day-of-month, preserving input order within a day.
///
/// Every calendar day inside the range gets a key even when no event falls on
/// it, so callers can index the map without an existence check.
pub fn bucket(
    events: Vec<EarningsEvent>,
    range: &DateRange,
) -> BTreeMap<u32, Vec<EarningsEvent>> {
    let mut days: BTreeMap<u32, Vec<EarningsEvent>> = BTreeMap::new();

    for event in events {
        days.entry(event.date.day()).or_default().push(event);
    }

    let mut date = range.start;
    while date <= range.end {
        days.entry(date.day()).or_default();
        date += Duration::days(1);
    }

    days
}
