use thiserror::Error;
use tracing::{info, warn};

use crate::models::StrategyPerformance;
use crate::services::indicators;
use crate::store::{StockStore, StoreError};

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Stock not found")]
    InstrumentNotFound,

    #[error("Stock data not found")]
    NoDataAvailable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Moving average and best trade for one instrument, computed over a single
/// fetch of its close series.
pub async fn get_strategy_performance(
    store: &dyn StockStore,
    instrument: &str,
    window: usize,
) -> Result<StrategyPerformance, StrategyError> {
    let stock = store.find_stock(instrument).await?.ok_or_else(|| {
        warn!("Strategy requested for unknown instrument {}", instrument);
        StrategyError::InstrumentNotFound
    })?;

    let closes = store.closes_for(stock.id).await?;
    if closes.is_empty() {
        warn!("No price data stored for {}", instrument);
        return Err(StrategyError::NoDataAvailable);
    }

    let performance = StrategyPerformance {
        moving_average: indicators::moving_average(&closes, window),
        best_trade: indicators::best_trade(&closes),
    };
    info!(
        "Strategy for {}: {} bars, best trade buy={} sell={} profit={:.4}",
        instrument,
        closes.len(),
        performance.best_trade.buy_index,
        performance.best_trade.sell_index,
        performance.best_trade.profit
    );
    Ok(performance)
}
