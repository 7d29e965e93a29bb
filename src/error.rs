use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body of every non-404 error
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure outcomes of the item endpoints
///
/// `NotFound` is answered with a bare 404; every other variant carries an
/// `ErrorResponse` JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// No item with the requested id, or the id segment is not an integer
    NotFound,
    /// Request body could not be read as an item
    InvalidBody(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

// `/api/items/abc` names no item, same as an unknown integer id.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Unroutable item id: {}", rejection.body_text());
        ApiError::NotFound
    }
}
