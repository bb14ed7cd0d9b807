use chrono::{Datelike, Duration, NaiveDate, Utc};
use chrono_tz::America::New_York;
use tracing::debug;

use crate::models::DateRange;

/// Resolve a display week label such as "MAR 24 - 28" or "MAR 31 - APR 4"
/// into an inclusive date range in the current year.
///
/// Labels that do not match the pattern (or name an impossible date) resolve
/// to Monday through Friday of the current week instead; this never fails.
pub fn resolve(label: &str) -> DateRange {
    let today = Utc::now().with_timezone(&New_York).date_naive();
    resolve_with_today(label, today)
}

/// Deterministic core of [`resolve`]; the label carries no year, so both
/// endpoints land in `today`'s year.
pub fn resolve_with_today(label: &str, today: NaiveDate) -> DateRange {
    match parse_label(label, today.year()) {
        Some(range) => range,
        None => {
            debug!("Week label {:?} did not parse; using current week", label);
            current_week(today)
        }
    }
}

fn parse_label(label: &str, year: i32) -> Option<DateRange> {
    let mut parts = label.split('-');
    let start_part = parts.next()?.trim();
    let end_part = parts.next().map(str::trim);
    if parts.next().is_some() {
        return None;
    }

    let (start_month, start_day) = parse_month_day(start_part)?;
    let (end_month, end_day) = match end_part {
        // "MAR 24" alone is a single-day range
        None => (start_month, start_day),
        Some(p) => match parse_month_day(p) {
            Some(md) => md,
            // end month omitted, e.g. "MAR 24 - 28"
            None => (start_month, parse_day(p)?),
        },
    };

    let start = NaiveDate::from_ymd_opt(year, start_month, start_day)?;
    let end = NaiveDate::from_ymd_opt(year, end_month, end_day)?;
    if start > end {
        return None;
    }

    Some(DateRange { start, end })
}

fn parse_month_day(part: &str) -> Option<(u32, u32)> {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    match tokens.as_slice() {
        [month, day] => Some((month_from_abbr(month)?, parse_day(day)?)),
        _ => None,
    }
}

fn parse_day(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn month_from_abbr(s: &str) -> Option<u32> {
    let month = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Monday through Friday of the week containing `today`.
fn current_week(today: NaiveDate) -> DateRange {
    let days_from_mon = today.weekday().num_days_from_monday() as i64;
    let monday = today - Duration::days(days_from_mon);
    let friday = monday + Duration::days(4);
    DateRange {
        start: monday,
        end: friday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolves_single_month_label() {
        let range = resolve_with_today("MAR 24 - 28", date(2025, 3, 26));
        assert_eq!(range.start, date(2025, 3, 24));
        assert_eq!(range.end, date(2025, 3, 28));
    }

    #[test]
    fn resolves_cross_month_label() {
        let range = resolve_with_today("MAR 31 - APR 4", date(2025, 3, 31));
        assert_eq!(range.start, date(2025, 3, 31));
        assert_eq!(range.end, date(2025, 4, 4));
    }

    #[test]
    fn label_is_case_insensitive() {
        let range = resolve_with_today("mar 24 - 28", date(2025, 3, 26));
        assert_eq!(range.start, date(2025, 3, 24));
        assert_eq!(range.end, date(2025, 3, 28));
    }

    #[test]
    fn single_day_label_is_a_one_day_range() {
        let range = resolve_with_today("MAR 24", date(2025, 3, 26));
        assert_eq!(range.start, range.end);
        assert_eq!(range.start, date(2025, 3, 24));
    }

    #[test]
    fn bad_label_falls_back_to_current_week() {
        // 2025-03-26 is a Wednesday
        let range = resolve_with_today("not a week", date(2025, 3, 26));
        assert_eq!(range.start, date(2025, 3, 24));
        assert_eq!(range.end, date(2025, 3, 28));
        assert_eq!(range.start.weekday(), Weekday::Mon);
        assert_eq!(range.end.weekday(), Weekday::Fri);
    }

    #[test]
    fn impossible_date_falls_back_to_current_week() {
        let range = resolve_with_today("FEB 30 - 31", date(2025, 3, 26));
        assert_eq!(range.start, date(2025, 3, 24));
        assert_eq!(range.end, date(2025, 3, 28));
    }

    #[test]
    fn inverted_range_falls_back_to_current_week() {
        let range = resolve_with_today("MAR 28 - 24", date(2025, 3, 26));
        assert_eq!(range.start, date(2025, 3, 24));
        assert_eq!(range.end, date(2025, 3, 28));
    }

    #[test]
    fn year_comes_from_today() {
        let range = resolve_with_today("MAR 24 - 28", date(2031, 6, 2));
        assert_eq!(range.start.year(), 2031);
        assert_eq!(range.end.year(), 2031);
    }

    #[test]
    fn resolved_ranges_are_ordered() {
        for label in ["MAR 24 - 28", "MAR 31 - APR 4", "DEC 29 - 31", "JAN 2"] {
            let range = resolve_with_today(label, date(2025, 3, 26));
            assert!(range.start <= range.end, "inverted range for {label:?}");
        }
    }
}
