use serde::{Deserialize, Serialize};

/// Stock summary row for the trending list and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: String,
}

/// Market index row for the overview strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIndex {
    pub name: String,
    pub value: String,
    pub change: f64,
    pub change_percent: f64,
}

/// Price chart for a single symbol, trimmed down from the Yahoo chart payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockChart {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_market_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    pub timestamps: Vec<i64>,
    pub close: Vec<Option<f64>>,
}
