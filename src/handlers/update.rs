use crate::error::{ApiError, ErrorResponse};
use crate::models::ItemInput;
use crate::repository::ItemRepository;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

/// PUT /api/items/{id} handler - Replace name and completion flag of an item
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemInput,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "No item with that id, or id is not an integer"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let mut conn = state.store.acquire().await?;
    match ItemRepository::new(&mut conn).update(id, input).await? {
        Some(_) => {
            tracing::info!("Successfully updated item with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
