use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    CreateStock, CreateStockData, InstrumentQuery, Stock, StockDataCreated, StockDataResponse,
};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-all-stocks", get(get_all_stocks))
        .route("/get-stock-data", get(get_stock_data))
        .route("/create-stock", post(create_stock))
        .route("/add-stock-data", post(add_stock_data))
}

pub async fn get_all_stocks(
    State(state): State<AppState>
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /get-all-stocks - Fetching all stocks");
    let stocks = services::stock_service::fetch_all(state.store.as_ref()).await
        .map_err(|e| {
            if e.is_internal() {
                error!("Failed to fetch stocks: {}", e);
            }
            e
        })?;
    Ok(Json(stocks))
}

pub async fn get_stock_data(
    State(state): State<AppState>,
    query: Result<Query<InstrumentQuery>, QueryRejection>,
) -> Result<Json<StockDataResponse>, AppError> {
    let Query(params) = query?;
    info!("GET /get-stock-data - Fetching data for {}", params.instrument);
    let response = services::stock_service::fetch_with_data(state.store.as_ref(), &params.instrument)
        .await
        .map_err(|e| {
            if e.is_internal() {
                error!("Failed to fetch stock data for {}: {}", params.instrument, e);
            }
            e
        })?;
    Ok(Json(response))
}

pub async fn create_stock(
    State(state): State<AppState>,
    body: Result<Json<CreateStock>, JsonRejection>,
) -> Result<Json<Stock>, AppError> {
    let Json(data) = body?;
    info!("POST /create-stock - Creating stock {}", data.instrument);
    let stock = services::stock_service::create(state.store.as_ref(), data).await
        .map_err(|e| {
            if e.is_internal() {
                error!("Failed to create stock: {}", e);
            }
            e
        })?;
    Ok(Json(stock))
}

pub async fn add_stock_data(
    State(state): State<AppState>,
    body: Result<Json<CreateStockData>, JsonRejection>,
) -> Result<Json<StockDataCreated>, AppError> {
    let Json(data) = body?;
    info!("POST /add-stock-data - Adding bar for stock {} at {}", data.stock_id, data.datetime);
    let stock_id = data.stock_id;
    let bar = services::stock_service::add_data(state.store.as_ref(), data).await
        .map_err(|e| {
            if e.is_internal() {
                error!("Failed to add stock data for stock {}: {}", stock_id, e);
            }
            e
        })?;
    Ok(Json(StockDataCreated::new(bar)))
}
