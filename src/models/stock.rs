use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A tradable instrument (e.g. "HINDALCO"). Bars hang off it via `stock_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub id: i32,
    pub instrument: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStock {
    pub instrument: String,
}

#[derive(Debug, Deserialize)]
pub struct InstrumentQuery {
    pub instrument: String,
}
