use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::services::strategy_service::StrategyError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(sqlx::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("Unprocessable request: {message}")]
    Unprocessable { status: StatusCode, message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { status, .. } => *status,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Failures of the service itself. Everything else is a client outcome
    /// and is logged where it is decided.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Db(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::NotFound(msg) | AppError::AlreadyExists(msg) => msg,
            AppError::Unprocessable { message, .. } => message,
            AppError::Db(_) => "Internal server error".to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Database(e) => AppError::Db(e),
            StoreError::Duplicate(_) => AppError::AlreadyExists("Stock already exists".to_string()),
        }
    }
}

impl From<StrategyError> for AppError {
    fn from(value: StrategyError) -> Self {
        match value {
            StrategyError::Store(e) => e.into(),
            not_found => AppError::NotFound(not_found.to_string()),
        }
    }
}

// Query strings that fail to deserialize are request-validation failures, not
// generic bad requests.
impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        AppError::Unprocessable {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: value.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        let status = match &value {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        AppError::Unprocessable {
            status,
            message: value.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_database_errors_are_not_leaked() {
        let (status, body) = render(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "Internal server error" }));
    }

    #[test]
    fn test_only_store_failures_are_internal() {
        assert!(AppError::Db(sqlx::Error::PoolTimedOut).is_internal());
        assert!(!AppError::NotFound("Stock not found".into()).is_internal());
        assert!(!AppError::AlreadyExists("Stock already exists".into()).is_internal());
        assert!(!AppError::from(StrategyError::InstrumentNotFound).is_internal());
    }

    #[tokio::test]
    async fn test_strategy_errors_map_to_not_found() {
        let (status, body) = render(StrategyError::NoDataAvailable.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Stock data not found" }));
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_bad_request() {
        let (status, body) = render(StoreError::Duplicate("HINDALCO".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "Stock already exists" }));
    }
}
