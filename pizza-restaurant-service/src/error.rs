use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Body returned for every rejected restaurant pizza, whatever the cause.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Why a restaurant pizza could not be built or stored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("price must be between 1 and 30, got {0}")]
    PriceOutOfRange(i64),
    #[error("restaurant {0} does not exist")]
    UnknownRestaurant(i32),
    #[error("pizza {0} does not exist")]
    UnknownPizza(i32),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("rejected by storage constraint: {0}")]
    Constraint(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Rejection(JsonRejection),
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON whose fields are missing, null or of the wrong type.
            JsonRejection::JsonDataError(e) => {
                ApiError::Validation(ValidationError::MalformedPayload(e.body_text()))
            }
            other => ApiError::Rejection(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{resource} not found") })),
            )
                .into_response(),
            ApiError::Validation(e) => {
                tracing::warn!("Rejected restaurant pizza: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": [VALIDATION_ERRORS] })),
                )
                    .into_response()
            }
            ApiError::Rejection(rejection) => rejection.into_response(),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always `["validation errors"]`
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = render(ApiError::NotFound("Restaurant")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Restaurant not found" }));
    }

    #[tokio::test]
    async fn test_every_validation_cause_has_the_same_body() {
        let causes = [
            ValidationError::PriceOutOfRange(35),
            ValidationError::UnknownRestaurant(9),
            ValidationError::UnknownPizza(9),
            ValidationError::MalformedPayload("missing field `price`".to_string()),
            ValidationError::Constraint("CHECK constraint failed".to_string()),
        ];
        for cause in causes {
            let (status, body) = render(ApiError::Validation(cause)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "errors": ["validation errors"] }));
        }
    }

    #[tokio::test]
    async fn test_store_errors_map_to_internal_error() {
        let err: ApiError =
            StoreError::Database(diesel::result::Error::BrokenTransactionManager).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[test]
    fn test_store_validation_stays_validation() {
        let err: ApiError = StoreError::from(ValidationError::UnknownPizza(3)).into();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::UnknownPizza(3))
        ));
    }
}
