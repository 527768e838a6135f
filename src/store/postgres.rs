use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

use crate::db;
use crate::models::{CreateStockData, Stock, StockData};
use crate::store::{StockStore, StoreError};

#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn list_stocks(&self) -> Result<Vec<Stock>, StoreError> {
        Ok(db::stock_queries::fetch_all(&self.pool).await?)
    }

    async fn find_stock(&self, instrument: &str) -> Result<Option<Stock>, StoreError> {
        Ok(db::stock_queries::fetch_by_instrument(&self.pool, instrument).await?)
    }

    async fn find_stock_by_id(&self, id: i32) -> Result<Option<Stock>, StoreError> {
        Ok(db::stock_queries::fetch_one(&self.pool, id).await?)
    }

    async fn create_stock(&self, instrument: &str) -> Result<Stock, StoreError> {
        match db::stock_queries::insert(&self.pool, instrument).await {
            Ok(stock) => Ok(stock),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Duplicate(instrument.to_string()))
            }
            Err(e) => {
                error!("Failed to insert stock {}: {}", instrument, e);
                Err(e.into())
            }
        }
    }

    async fn bars_for(&self, stock_id: i32) -> Result<Vec<StockData>, StoreError> {
        Ok(db::stock_data_queries::fetch_for_stock(&self.pool, stock_id).await?)
    }

    async fn closes_for(&self, stock_id: i32) -> Result<Vec<f64>, StoreError> {
        Ok(db::stock_data_queries::fetch_closes(&self.pool, stock_id).await?)
    }

    async fn add_bar(&self, input: CreateStockData) -> Result<StockData, StoreError> {
        Ok(db::stock_data_queries::insert(&self.pool, &input).await?)
    }

    async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}
