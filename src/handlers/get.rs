use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

/// GET /api/items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "No item with that id, or id is not an integer"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(id) = id?;

    let mut conn = state.store.acquire().await?;
    match ItemRepository::new(&mut conn).get(id).await? {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
