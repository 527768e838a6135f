use sqlx::PgPool;
use crate::models::{CreateStockData, StockData};

/// Fetch every bar for a stock.
///
/// Returns bars ordered by timestamp ascending (oldest first); bars sharing a
/// timestamp keep insertion order.
pub async fn fetch_for_stock(
    pool: &PgPool,
    stock_id: i32,
) -> Result<Vec<StockData>, sqlx::Error> {
    sqlx::query_as::<_, StockData>(
        r#"
        SELECT id, stock_id, datetime, open, high, low, close, volume
        FROM stock_data
        WHERE stock_id = $1
        ORDER BY datetime ASC, id ASC
        "#,
    )
    .bind(stock_id)
    .fetch_all(pool)
    .await
}

/// Close prices only, in the same order as `fetch_for_stock`.
pub async fn fetch_closes(
    pool: &PgPool,
    stock_id: i32,
) -> Result<Vec<f64>, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        r#"
        SELECT close
        FROM stock_data
        WHERE stock_id = $1
        ORDER BY datetime ASC, id ASC
        "#,
    )
    .bind(stock_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    input: &CreateStockData,
) -> Result<StockData, sqlx::Error> {
    sqlx::query_as::<_, StockData>(
        r#"
        INSERT INTO stock_data (stock_id, datetime, open, high, low, close, volume)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, stock_id, datetime, open, high, low, close, volume
        "#,
    )
    .bind(input.stock_id)
    .bind(input.datetime)
    .bind(input.open)
    .bind(input.high)
    .bind(input.low)
    .bind(input.close)
    .bind(input.volume)
    .fetch_one(pool)
    .await
}
