use tracing::warn;

use crate::errors::AppError;
use crate::models::{CreateStock, CreateStockData, Stock, StockData, StockDataResponse};
use crate::store::StockStore;

pub async fn fetch_all(store: &dyn StockStore) -> Result<Vec<Stock>, AppError> {
    let stocks = store.list_stocks().await?;
    if stocks.is_empty() {
        warn!("No stocks stored");
        return Err(AppError::NotFound("No stocks found".to_string()));
    }
    Ok(stocks)
}

/// The stock and all of its bars. A known stock with no bars is not an error.
pub async fn fetch_with_data(
    store: &dyn StockStore,
    instrument: &str,
) -> Result<StockDataResponse, AppError> {
    let stock = store
        .find_stock(instrument)
        .await?
        .ok_or_else(|| {
            warn!("Stock data requested for unknown instrument {}", instrument);
            AppError::NotFound("Stock not found".to_string())
        })?;
    let data = store.bars_for(stock.id).await?;
    Ok(StockDataResponse { stock, data })
}

pub async fn create(store: &dyn StockStore, input: CreateStock) -> Result<Stock, AppError> {
    if store.find_stock(&input.instrument).await?.is_some() {
        warn!("Stock {} already exists", input.instrument);
        return Err(AppError::AlreadyExists("Stock already exists".to_string()));
    }
    // A concurrent insert can still win between the lookup and here; the
    // store reports that as a duplicate.
    let stock = store.create_stock(&input.instrument).await?;
    Ok(stock)
}

pub async fn add_data(
    store: &dyn StockStore,
    input: CreateStockData,
) -> Result<StockData, AppError> {
    if store.find_stock_by_id(input.stock_id).await?.is_none() {
        warn!("Cannot add data for unknown stock id {}", input.stock_id);
        return Err(AppError::NotFound("Stock not found".to_string()));
    }
    let bar = store.add_bar(input).await?;
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStockStore;
    use chrono::NaiveDate;

    fn new_bar(stock_id: i32) -> CreateStockData {
        CreateStockData {
            stock_id,
            datetime: NaiveDate::from_ymd_opt(2014, 1, 24)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            open: 113.15,
            high: 115.35,
            low: 113.0,
            close: 114.0,
            volume: 5_737_135,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_empty_is_not_found() {
        let store = MemoryStockStore::new();
        let err = fetch_all(&store).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "No stocks found"));
    }

    #[tokio::test]
    async fn test_create_then_duplicate() {
        let store = MemoryStockStore::new();
        let stock = create(&store, CreateStock { instrument: "NEWSTOCK".into() }).await.unwrap();
        assert_eq!(stock.instrument, "NEWSTOCK");

        let err = create(&store, CreateStock { instrument: "NEWSTOCK".into() }).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(ref m) if m == "Stock already exists"));
    }

    #[tokio::test]
    async fn test_add_data_requires_existing_stock() {
        let store = MemoryStockStore::new();
        let err = add_data(&store, new_bar(999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Stock not found"));
    }

    #[tokio::test]
    async fn test_fetch_with_data_returns_bars() {
        let store = MemoryStockStore::new();
        let stock = create(&store, CreateStock { instrument: "HINDALCO".into() }).await.unwrap();
        let bar = add_data(&store, new_bar(stock.id)).await.unwrap();

        let response = fetch_with_data(&store, "HINDALCO").await.unwrap();
        assert_eq!(response.stock, stock);
        assert_eq!(response.data, vec![bar]);
    }

    #[tokio::test]
    async fn test_fetch_with_data_no_bars_is_ok() {
        let store = MemoryStockStore::new();
        create(&store, CreateStock { instrument: "HINDALCO".into() }).await.unwrap();

        let response = fetch_with_data(&store, "HINDALCO").await.unwrap();
        assert!(response.data.is_empty());
    }
}
