use chrono::NaiveDate;
use tracing::{info, warn};

use crate::models::RawEarningsRecord;
use crate::service::finance::FinanceServiceError;

/// Default earnings-calendar endpoint; override with EARNINGS_API_URL.
pub const DEFAULT_EARNINGS_API_URL: &str = "https://api.example.com/earnings/calendar";

/// Fetch raw earnings records for a date range from the external API.
///
/// The endpoint takes `start`/`end` ISO dates and returns a JSON array of
/// records shaped like [`RawEarningsRecord`].
pub async fn fetch_earnings_range(
    client: &reqwest::Client,
    endpoint: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<RawEarningsRecord>, FinanceServiceError> {
    info!("Fetching earnings from {} to {}", from, to);

    let from_str = from.format("%Y-%m-%d").to_string();
    let to_str = to.format("%Y-%m-%d").to_string();

    let resp = client
        .get(endpoint)
        .query(&[("start", from_str.as_str()), ("end", to_str.as_str())])
        .send()
        .await
        .map_err(|e| {
            warn!("Earnings API request failed: {}", e);
            FinanceServiceError::Http(format!("earnings request failed: {e}"))
        })?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "unable to read body".to_string());
        warn!("Earnings API returned error status {}: {}", status, body);
        return Err(FinanceServiceError::Http(format!(
            "earnings api status {}: {}",
            status, body
        )));
    }

    let raw_bytes = resp.bytes().await.map_err(|e| {
        warn!("Failed to read earnings API body: {}", e);
        FinanceServiceError::Http(format!("earnings body read failed: {e}"))
    })?;

    let records: Vec<RawEarningsRecord> = serde_json::from_slice(&raw_bytes).map_err(|e| {
        let preview = String::from_utf8_lossy(&raw_bytes[..raw_bytes.len().min(500)]);
        warn!(
            "Failed to parse earnings API response: {}; body preview: {}",
            e, preview
        );
        FinanceServiceError::Http(format!("earnings parse failed: {e}"))
    })?;

    info!("Fetched {} raw earnings records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use crate::models::RawEarningsRecord;

    #[test]
    fn deserializes_upstream_field_names() {
        let body = r#"[
            {
                "symbol": "CTAS",
                "assetName": "Cintas Corporation",
                "earningsDate": "2025-03-26",
                "earningsTime": "08:35",
                "epsEstimate": 3.78,
                "importance": 3
            },
            {"symbol": "MYST"}
        ]"#;

        let records: Vec<RawEarningsRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].asset_name.as_deref(), Some("Cintas Corporation"));
        assert_eq!(records[0].earnings_time.as_deref(), Some("08:35"));
        assert_eq!(records[0].eps_estimate, Some(3.78));
        assert_eq!(records[0].importance, Some(3));
        assert!(records[1].earnings_date.is_none());
    }
}
