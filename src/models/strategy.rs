use serde::{Deserialize, Serialize};

/// Best single buy-then-sell pair over a close series.
///
/// Indices refer to positions in the series the trade was computed from.
/// `profit` is never negative: a series that never rises above its running
/// minimum reports `{0, 0, 0.0}` (no trade).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BestTrade {
    #[serde(rename = "BuyIndex")]
    pub buy_index: usize,
    #[serde(rename = "SellIndex")]
    pub sell_index: usize,
    #[serde(rename = "Profit")]
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPerformance {
    #[serde(rename = "MovingAverage")]
    pub moving_average: Vec<f64>,
    #[serde(rename = "BestBuySell")]
    pub best_trade: BestTrade,
}
