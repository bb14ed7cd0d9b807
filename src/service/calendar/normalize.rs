use chrono::NaiveDate;
use tracing::debug;

use crate::models::{EarningsEvent, EpsInfo, RawEarningsRecord};

use super::session;

/// Convert raw upstream records into canonical earnings events.
///
/// Records without a usable earnings date are dropped one by one; everything
/// else maps field for field, preserving input order. A missing asset name is
/// synthesized from the symbol and a missing EPS estimate defaults to zero.
pub fn normalize(records: &[RawEarningsRecord]) -> Vec<EarningsEvent> {
    let mut events = Vec::with_capacity(records.len());

    for record in records {
        let Some(date) = record
            .earnings_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            debug!(
                "Dropping earnings record for {} without a usable date",
                record.symbol
            );
            continue;
        };

        let name = record
            .asset_name
            .clone()
            .unwrap_or_else(|| format!("{} Inc.", record.symbol));

        events.push(EarningsEvent {
            symbol: record.symbol.clone(),
            name,
            date,
            time: session::classify(record.earnings_time.as_deref()),
            eps: EpsInfo {
                estimate: record.eps_estimate.unwrap_or(0.0),
                actual: record.eps_actual,
                surprise: record.eps_surprise,
            },
            importance: record.importance,
        });
    }

    events
}
