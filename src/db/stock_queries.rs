use sqlx::PgPool;
use crate::models::Stock;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT id, instrument
                      FROM stocks
                      ORDER BY id ASC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_by_instrument(pool: &PgPool, instrument: &str) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT id, instrument
                      FROM stocks
                      WHERE instrument = $1")
        .bind(instrument)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: i32) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT id, instrument
                      FROM stocks
                      WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, instrument: &str) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>("INSERT INTO stocks (instrument)
                  VALUES ($1)
                    RETURNING id, instrument")
        .bind(instrument)
        .fetch_one(pool)
        .await
}
