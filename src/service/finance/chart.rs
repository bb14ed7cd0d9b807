use serde_json::Value;
use tracing::{info, warn};

use crate::models::StockChart;
use crate::service::finance::FinanceServiceError;

const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Fetch chart data for a symbol from the Yahoo chart API.
pub async fn fetch_chart(
    client: &reqwest::Client,
    symbol: &str,
    interval: &str,
    range: &str,
) -> Result<StockChart, FinanceServiceError> {
    info!("Fetching {} chart ({} / {})", symbol, interval, range);

    let url = format!("{YAHOO_CHART_URL}/{symbol}");
    let resp = client
        .get(&url)
        .query(&[
            ("interval", interval),
            ("range", range),
            ("includePrePost", "false"),
            ("events", "div,split"),
        ])
        .send()
        .await
        .map_err(|e| {
            warn!("Chart request for {} failed: {}", symbol, e);
            FinanceServiceError::Http(format!("chart request failed: {e}"))
        })?;

    if !resp.status().is_success() {
        let status = resp.status();
        warn!("Chart API returned error status {} for {}", status, symbol);
        return Err(FinanceServiceError::Http(format!(
            "chart api status {status}"
        )));
    }

    let data: Value = resp.json().await.map_err(|e| {
        warn!("Failed to parse chart response for {}: {}", symbol, e);
        FinanceServiceError::Http(format!("chart parse failed: {e}"))
    })?;

    parse_chart(&data, symbol).ok_or_else(|| FinanceServiceError::NotFound(symbol.to_string()))
}

fn parse_chart(data: &Value, symbol: &str) -> Option<StockChart> {
    let result = data
        .get("chart")?
        .get("result")?
        .as_array()?
        .first()?;

    let meta = result.get("meta")?;

    let timestamps = result
        .get("timestamp")
        .and_then(|t| t.as_array())
        .map(|arr| arr.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    let close = result
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.as_array())
        .and_then(|arr| arr.first())
        .and_then(|q| q.get("close"))
        .and_then(|c| c.as_array())
        .map(|arr| arr.iter().map(Value::as_f64).collect())
        .unwrap_or_default();

    Some(StockChart {
        symbol: meta
            .get("symbol")
            .and_then(|s| s.as_str())
            .unwrap_or(symbol)
            .to_string(),
        currency: meta
            .get("currency")
            .and_then(|c| c.as_str())
            .map(str::to_string),
        regular_market_price: meta.get("regularMarketPrice").and_then(Value::as_f64),
        previous_close: meta
            .get("chartPreviousClose")
            .or_else(|| meta.get("previousClose"))
            .and_then(Value::as_f64),
        timestamps,
        close,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_chart_payload() {
        let data = json!({
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "AAPL",
                        "currency": "USD",
                        "regularMarketPrice": 175.34,
                        "chartPreviousClose": 172.89
                    },
                    "timestamp": [1711290600, 1711290660],
                    "indicators": {
                        "quote": [{"close": [175.10, null]}]
                    }
                }],
                "error": null
            }
        });

        let chart = parse_chart(&data, "AAPL").unwrap();
        assert_eq!(chart.symbol, "AAPL");
        assert_eq!(chart.currency.as_deref(), Some("USD"));
        assert_eq!(chart.regular_market_price, Some(175.34));
        assert_eq!(chart.previous_close, Some(172.89));
        assert_eq!(chart.timestamps.len(), 2);
        assert_eq!(chart.close, vec![Some(175.10), None]);
    }

    #[test]
    fn missing_result_is_none() {
        let data = json!({"chart": {"result": [], "error": "Not Found"}});
        assert!(parse_chart(&data, "ZZZZ").is_none());
    }
}
