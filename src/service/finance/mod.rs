use std::time::Duration as StdDuration;

use chrono::NaiveDate;

use crate::models::{EarningsFeedItem, MarketIndex, RawEarningsRecord, Stock, StockChart};

pub mod chart;
pub mod earnings;

#[derive(Debug, thiserror::Error)]
pub enum FinanceServiceError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("No chart data for symbol {0}")]
    NotFound(String),
}

/// Market data behind the dashboard: trending stocks, index overview, search,
/// the earnings feed and per-symbol charts. List data is the fixed dashboard
/// dataset; charts and the earnings range go out over HTTP.
pub struct FinanceService {
    client: reqwest::Client,
}

impl FinanceService {
    pub fn new() -> Result<Self, FinanceServiceError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(15))
            .build()
            .map_err(|e| FinanceServiceError::Http(format!("failed to build client: {e}")))?;

        Ok(Self { client })
    }

    /// Trending stocks shown on the dashboard home page.
    pub async fn get_trending_stocks(&self) -> Result<Vec<Stock>, FinanceServiceError> {
        Ok(trending_stocks())
    }

    /// Market indices for the overview strip.
    pub async fn get_market_indices(&self) -> Result<Vec<MarketIndex>, FinanceServiceError> {
        Ok(vec![
            index("S&P 500", "5,563.98", 12.34, 0.22),
            index("NASDAQ", "17,480.84", 57.62, 0.33),
            index("DOW", "38,239.98", -45.12, -0.12),
            index("BTC/USD", "$65,821.52", -1103.45, -1.65),
        ])
    }

    /// Case-insensitive search over symbol and company name.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<Stock>, FinanceServiceError> {
        let needle = query.to_lowercase();
        Ok(trending_stocks()
            .into_iter()
            .filter(|s| {
                s.symbol.to_lowercase().contains(&needle) || s.name.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Recap items for the earnings feed below the calendar.
    pub async fn get_earnings_feed(&self) -> Result<Vec<EarningsFeedItem>, FinanceServiceError> {
        Ok(earnings_feed())
    }

    /// Fetch a price chart for a symbol from the Yahoo chart API.
    pub async fn get_stock_chart(
        &self,
        symbol: &str,
        interval: &str,
        range: &str,
    ) -> Result<StockChart, FinanceServiceError> {
        chart::fetch_chart(&self.client, symbol, interval, range).await
    }

    /// Fetch raw earnings records for a date range from the default endpoint.
    pub async fn get_earnings_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawEarningsRecord>, FinanceServiceError> {
        earnings::fetch_earnings_range(
            &self.client,
            earnings::DEFAULT_EARNINGS_API_URL,
            from,
            to,
        )
        .await
    }
}

/// Format a large number for display (e.g. 1000000 -> "1.00M").
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.2}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{num:.2}")
    }
}

/// Format a price for display based on the symbol type: currency pairs get a
/// dollar sign, indices get thousands separators.
pub fn format_price(symbol: &str, price: f64) -> String {
    if symbol.contains("-USD") {
        format!("${}", with_thousands(price))
    } else if symbol.starts_with('^') {
        with_thousands(price)
    } else {
        format!("{price:.2}")
    }
}

fn with_thousands(price: f64) -> String {
    let formatted = format!("{price:.2}");
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    let digits: Vec<char> = whole.chars().collect();
    let skip = if digits.first() == Some(&'-') { 1 } else { 0 };
    for (i, c) in digits.iter().enumerate() {
        if i > skip && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("{grouped}.{frac}")
}

fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: &str,
) -> Stock {
    Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        volume: volume.to_string(),
    }
}

fn index(name: &str, value: &str, change: f64, change_percent: f64) -> MarketIndex {
    MarketIndex {
        name: name.to_string(),
        value: value.to_string(),
        change,
        change_percent,
    }
}

fn trending_stocks() -> Vec<Stock> {
    vec![
        stock("AAPL", "Apple Inc.", 175.34, 2.45, 1.42, "32.5M"),
        stock("MSFT", "Microsoft Corporation", 425.22, 5.67, 1.35, "28.1M"),
        stock("GOOGL", "Alphabet Inc.", 152.87, -1.23, -0.80, "18.7M"),
        stock("AMZN", "Amazon.com, Inc.", 182.75, 3.21, 1.79, "25.3M"),
        stock("TSLA", "Tesla, Inc.", 175.34, -7.89, -4.31, "45.2M"),
        stock("META", "Meta Platforms, Inc.", 485.39, 10.25, 2.16, "22.8M"),
        stock("NVDA", "NVIDIA Corporation", 925.63, 15.78, 1.73, "38.4M"),
        stock("JPM", "JPMorgan Chase & Co.", 198.45, -2.34, -1.17, "15.6M"),
    ]
}

fn earnings_feed() -> Vec<EarningsFeedItem> {
    vec![
        EarningsFeedItem {
            id: 1,
            symbol: "LEN".to_string(),
            name: "Lennar Corporation".to_string(),
            title: "LEN Q1 2025 Recap".to_string(),
            summary: Some(
                "Lennar Corporation reported strong Q1 2025 results, with revenue of $8.73 \
                 billion, up 12% year-over-year, and earnings per share of $2.84, exceeding \
                 analyst estimates of $2.56. The homebuilder delivered 16,798 homes during the \
                 quarter, a 15% increase from the same period last year, while new orders rose \
                 18% to 19,324 homes."
                    .to_string(),
            ),
            positives: None,
            negatives: None,
        },
        EarningsFeedItem {
            id: 2,
            symbol: "CCL".to_string(),
            name: "Carnival Corporation".to_string(),
            title: "Summary of Carnival Corporation's Q1 2025 Earnings Call".to_string(),
            summary: None,
            positives: Some(vec![
                "Strong Financial Performance: Carnival reported record highs in revenue, \
                 EBITDA, operating income, and customer deposits for Q1 2025, with net income \
                 exceeding guidance by over $170 million."
                    .to_string(),
                "Yield Improvement: The company achieved a 7.3% yield increase, surpassing \
                 previous guidance and building on a 17% improvement from the prior year."
                    .to_string(),
            ]),
            negatives: None,
        },
    ]
}

pub use FinanceServiceError as Error;
