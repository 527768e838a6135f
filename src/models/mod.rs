mod stock;
mod stock_data;
mod strategy;

pub use stock::{CreateStock, InstrumentQuery, Stock};
pub use stock_data::{CreateStockData, StockData, StockDataCreated, StockDataResponse};
pub use strategy::{BestTrade, StrategyPerformance};
