//! Stock price storage and simple strategy analytics over a REST API.
//!
//! Instruments and their daily OHLCV bars are kept in a [`store::StockStore`];
//! the `/strategy` endpoints compute a fixed-window moving average and the best
//! single buy/sell trade over an instrument's close prices.

pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
