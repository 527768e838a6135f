use axum::{
    Json, Router,
    routing::get,
};
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    info!("GET / - Root");
    Json(json!({ "message": "Server is running healthy" }))
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}
