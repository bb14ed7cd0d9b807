use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Market-session timing of an earnings announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionTime {
    Before,
    During,
    After,
}

/// EPS figures attached to an earnings event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsInfo {
    pub estimate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surprise: Option<f64>,
}

/// Earnings event used by the dashboard for calendar displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub symbol: String,
    pub name: String,
    pub date: NaiveDate,
    pub time: SessionTime,
    pub eps: EpsInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,
}

/// Raw earnings-calendar record, field names as the upstream API sends them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEarningsRecord {
    pub symbol: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub earnings_date: Option<String>,
    #[serde(default)]
    pub earnings_time: Option<String>, // HH:MM, exchange-local
    #[serde(default)]
    pub eps_estimate: Option<f64>,
    #[serde(default)]
    pub eps_actual: Option<f64>,
    #[serde(default)]
    pub eps_surprise: Option<f64>,
    #[serde(default)]
    pub importance: Option<i64>,
}

/// Inclusive calendar date range resolved from a display week label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Earnings recap item shown in the feed below the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsFeedItem {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negatives: Option<Vec<String>>,
}
