use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{InstrumentQuery, StrategyPerformance};
use crate::services::strategy_service::{self, StrategyError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/strategy", get(get_strategy))
        .route("/strategy/performance", get(get_strategy))
}

pub async fn get_strategy(
    State(state): State<AppState>,
    query: Result<Query<InstrumentQuery>, QueryRejection>,
) -> Result<Json<StrategyPerformance>, AppError> {
    let Query(params) = query?;
    info!("GET /strategy - Computing strategy for {}", params.instrument);
    let performance = strategy_service::get_strategy_performance(
        state.store.as_ref(),
        &params.instrument,
        state.ma_window,
    )
    .await
    .map_err(|e| {
        if let StrategyError::Store(inner) = &e {
            error!("Failed to compute strategy for {}: {}", params.instrument, inner);
        }
        e
    })?;
    Ok(Json(performance))
}
