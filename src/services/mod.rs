pub mod indicators;
pub mod stock_service;
pub mod strategy_service;
