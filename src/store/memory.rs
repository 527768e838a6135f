use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::{CreateStockData, Stock, StockData};
use crate::store::{StockStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    stocks: Vec<Stock>,
    bars: Vec<StockData>,
}

/// Process-local store with the same ordering guarantees as the Postgres one.
///
/// Ids are assigned sequentially from 1, like a `SERIAL` column. Nothing is
/// persisted across restarts.
#[derive(Clone, Default)]
pub struct MemoryStockStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn list_stocks(&self) -> Result<Vec<Stock>, StoreError> {
        Ok(self.tables.read().stocks.clone())
    }

    async fn find_stock(&self, instrument: &str) -> Result<Option<Stock>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.stocks.iter().find(|s| s.instrument == instrument).cloned())
    }

    async fn find_stock_by_id(&self, id: i32) -> Result<Option<Stock>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.stocks.iter().find(|s| s.id == id).cloned())
    }

    async fn create_stock(&self, instrument: &str) -> Result<Stock, StoreError> {
        let mut tables = self.tables.write();
        if tables.stocks.iter().any(|s| s.instrument == instrument) {
            return Err(StoreError::Duplicate(instrument.to_string()));
        }
        let stock = Stock {
            id: tables.stocks.len() as i32 + 1,
            instrument: instrument.to_string(),
        };
        tables.stocks.push(stock.clone());
        Ok(stock)
    }

    async fn bars_for(&self, stock_id: i32) -> Result<Vec<StockData>, StoreError> {
        let mut bars: Vec<StockData> = self
            .tables
            .read()
            .bars
            .iter()
            .filter(|b| b.stock_id == stock_id)
            .cloned()
            .collect();
        // stable sort keeps insertion order for equal timestamps
        bars.sort_by_key(|b| b.datetime);
        Ok(bars)
    }

    async fn add_bar(&self, input: CreateStockData) -> Result<StockData, StoreError> {
        let mut tables = self.tables.write();
        let bar = StockData {
            id: tables.bars.len() as i32 + 1,
            stock_id: input.stock_id,
            datetime: input.datetime,
            open: input.open,
            high: input.high,
            low: input.low,
            close: input.close,
            volume: input.volume,
        };
        tables.bars.push(bar.clone());
        Ok(bar)
    }
}
