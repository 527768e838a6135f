//! Price Series Accessor: the persistence seam the services talk to.
//!
//! The HTTP layer and the analytics only ever see `Arc<dyn StockStore>`. The
//! hosting binary picks the implementation at startup and owns its lifecycle
//! (acquire on boot, [`StockStore::close`] on shutdown).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateStockData, Stock, StockData};

pub use memory::MemoryStockStore;
pub use postgres::PgStockStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("duplicate instrument: {0}")]
    Duplicate(String),
}

#[async_trait]
pub trait StockStore: Send + Sync {
    async fn list_stocks(&self) -> Result<Vec<Stock>, StoreError>;

    async fn find_stock(&self, instrument: &str) -> Result<Option<Stock>, StoreError>;

    async fn find_stock_by_id(&self, id: i32) -> Result<Option<Stock>, StoreError>;

    /// Fails with [`StoreError::Duplicate`] when the instrument already exists.
    async fn create_stock(&self, instrument: &str) -> Result<Stock, StoreError>;

    /// All bars for a stock, oldest first.
    async fn bars_for(&self, stock_id: i32) -> Result<Vec<StockData>, StoreError>;

    /// Close prices index-aligned with [`StockStore::bars_for`].
    async fn closes_for(&self, stock_id: i32) -> Result<Vec<f64>, StoreError> {
        let bars = self.bars_for(stock_id).await?;
        Ok(bars.into_iter().map(|b| b.close).collect())
    }

    async fn add_bar(&self, input: CreateStockData) -> Result<StockData, StoreError>;

    /// Release underlying resources. Called once by the host on shutdown.
    async fn close(&self) {}
}
