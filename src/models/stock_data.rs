use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use super::Stock;

// One daily OHLCV bar for a stock. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub id: i32,
    pub stock_id: i32,
    pub datetime: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockData {
    pub stock_id: i32,
    #[serde(deserialize_with = "deserialize_bar_time")]
    pub datetime: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

#[derive(Debug, Serialize)]
pub struct StockDataResponse {
    pub stock: Stock,
    pub data: Vec<StockData>,
}

#[derive(Debug, Serialize)]
pub struct StockDataCreated {
    pub message: &'static str,
    pub data: StockData,
}

impl StockDataCreated {
    pub fn new(data: StockData) -> Self {
        Self {
            message: "Stock data created successfully",
            data,
        }
    }
}

/// Bar timestamps are stored as naive UTC. Accepts RFC 3339 with an offset
/// (`Z`, `+05:30`), a bare `YYYY-MM-DDTHH:MM:SS[.f]`, or a date alone
/// (midnight).
fn deserialize_bar_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bar_time(raw.trim()).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid datetime `{}`", raw))
    })
}

fn parse_bar_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
