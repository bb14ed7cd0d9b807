use std::collections::BTreeMap;
use std::env;
use std::time::Duration as StdDuration;

use tracing::{info, warn};

use crate::models::{DateRange, EarningsEvent, RawEarningsRecord};
use crate::service::finance::earnings::{fetch_earnings_range, DEFAULT_EARNINGS_API_URL};
use crate::service::finance::FinanceServiceError;

pub mod bucket;
pub mod fallback;
pub mod filter;
pub mod normalize;
pub mod session;
pub mod week;

/// Day-indexed earnings calendar: day-of-month to the events on that day.
pub type EarningsCalendar = BTreeMap<u32, Vec<EarningsEvent>>;

/// Result of one pipeline run. The public API only hands back the day map;
/// the degraded cause feeds logging.
pub(crate) struct CalendarOutcome {
    pub(crate) days: EarningsCalendar,
    pub(crate) degraded: Option<String>,
}

/// Orchestrates the weekly earnings calendar: resolve the week label, fetch
/// raw records, then normalize, filter and bucket them. Upstream failures
/// substitute the built-in dataset through the identical tail of the
/// pipeline.
pub struct CalendarService {
    client: reqwest::Client,
    endpoint: String,
}

impl CalendarService {
    /// Build a calendar service against the default upstream endpoint, or
    /// the EARNINGS_API_URL env var when set.
    pub fn new() -> Result<Self, FinanceServiceError> {
        let endpoint =
            env::var("EARNINGS_API_URL").unwrap_or_else(|_| DEFAULT_EARNINGS_API_URL.to_string());
        Self::with_endpoint(endpoint)
    }

    /// Build a calendar service against a specific upstream endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FinanceServiceError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(15))
            .build()
            .map_err(|e| FinanceServiceError::Http(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Earnings calendar for a display week label such as "MAR 24 - 28".
    ///
    /// Total by design: week labels that do not parse resolve to the current
    /// week, upstream failures substitute the built-in dataset, and malformed
    /// records are dropped one by one. Every day in the resolved range has an
    /// entry in the returned map.
    pub async fn get_earnings_calendar(&self, week: &str) -> EarningsCalendar {
        let range = week::resolve(week);
        let outcome = self.build_calendar(range).await;

        match &outcome.degraded {
            None => info!(
                "Built earnings calendar for {} to {} from live data",
                range.start, range.end
            ),
            Some(cause) => warn!(
                "Built earnings calendar for {} to {} from fallback data: {}",
                range.start, range.end, cause
            ),
        }

        outcome.days
    }

    pub(crate) async fn build_calendar(&self, range: DateRange) -> CalendarOutcome {
        match fetch_earnings_range(&self.client, &self.endpoint, range.start, range.end).await {
            Ok(records) => CalendarOutcome {
                days: assemble(&records, &range),
                degraded: None,
            },
            Err(e) => CalendarOutcome {
                days: assemble(fallback::records(), &range),
                degraded: Some(e.to_string()),
            },
        }
    }
}

/// Shared normalize -> filter -> bucket tail of the pipeline. Live and
/// fallback records take the identical path through here.
fn assemble(records: &[RawEarningsRecord], range: &DateRange) -> EarningsCalendar {
    let events = normalize::normalize(records);
    let visible = filter::apply(events);
    bucket::bucket(visible, range)
}

/// True when the calendar was filtered down to importance-3 events only,
/// which is when the dashboard shows its "high importance only" banner.
pub fn high_importance_only(calendar: &EarningsCalendar) -> bool {
    filter::high_importance_only(calendar.values().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn assemble_is_idempotent_over_the_same_raw_input() {
        let window = range((2025, 3, 24), (2025, 3, 28));
        let first = assemble(fallback::records(), &window);
        let second = assemble(fallback::records(), &window);
        assert_eq!(first, second);
    }

    #[test]
    fn assemble_keys_every_day_in_range() {
        let window = range((2025, 3, 24), (2025, 3, 28));
        let days = assemble(&[], &window);
        assert_eq!(days.len(), 5);
        assert!(days.values().all(Vec::is_empty));
    }

    #[test]
    fn fallback_dataset_survives_the_importance_gate() {
        let window = range((2025, 3, 24), (2025, 3, 28));
        let days = assemble(fallback::records(), &window);
        let total: usize = days.values().map(Vec::len).sum();
        // GME and LULU are rated 4, so the gate passes the whole batch.
        assert_eq!(total, fallback::records().len());
        assert!(!high_importance_only(&days));
    }
}
