use once_cell::sync::Lazy;

use crate::models::RawEarningsRecord;

/// Fixed raw-record dataset substituted when the upstream earnings API is
/// unavailable. Kept in raw form so it flows through the same
/// normalize/filter/bucket path as live data.
static FALLBACK_RECORDS: Lazy<Vec<RawEarningsRecord>> = Lazy::new(|| {
    vec![
        record("LUNR", "Lunar Industries", "2025-03-24", "07:00", 0.45, Some(2)),
        record("OKLO", "Oklo Power", "2025-03-24", "16:05", -0.12, Some(3)),
        record("RUM", "Rumble Inc.", "2025-03-25", "08:00", 0.32, Some(2)),
        record("GME", "GameStop Corp.", "2025-03-25", "16:05", 0.18, Some(4)),
        record("CHWY", "Chewy Inc.", "2025-03-26", "06:30", 0.15, Some(3)),
        record("CTAS", "Cintas Corporation", "2025-03-26", "08:35", 3.78, Some(3)),
        record("DLTR", "Dollar Tree Inc.", "2025-03-26", "07:30", 2.65, Some(3)),
        record("PAYX", "Paychex Inc.", "2025-03-26", "08:30", 1.12, Some(3)),
        record("JEF", "Jefferies Financial Group", "2025-03-26", "16:10", 0.76, Some(2)),
        record("BITF", "Bitfarms Ltd.", "2025-03-27", "07:00", -0.03, Some(1)),
        record("LULU", "Lululemon Athletica", "2025-03-27", "16:05", 5.42, Some(4)),
        record("KULR", "KULR Technology Group", "2025-03-27", "16:30", -0.04, None),
    ]
});

/// The built-in week of earnings used when the upstream fetch fails.
pub fn records() -> &'static [RawEarningsRecord] {
    &FALLBACK_RECORDS
}

fn record(
    symbol: &str,
    name: &str,
    date: &str,
    time: &str,
    estimate: f64,
    importance: Option<i64>,
) -> RawEarningsRecord {
    RawEarningsRecord {
        symbol: symbol.to_string(),
        asset_name: Some(name.to_string()),
        earnings_date: Some(date.to_string()),
        earnings_time: Some(time.to_string()),
        eps_estimate: Some(estimate),
        eps_actual: None,
        eps_surprise: None,
        importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fallback_record_has_a_date() {
        assert!(!records().is_empty());
        assert!(records().iter().all(|r| r.earnings_date.is_some()));
    }

    #[test]
    fn fallback_batch_contains_a_high_importance_event() {
        // Keeps the importance gate open so the fallback calendar is not empty.
        assert!(records()
            .iter()
            .any(|r| r.importance.is_some_and(|i| i >= 4)));
    }
}
