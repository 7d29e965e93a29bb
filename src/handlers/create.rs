use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    Json,
};

/// POST /api/items handler - Create an item
///
/// The store assigns the id; the response carries the stored item and a
/// `Location` header pointing at it.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = Item,
            headers(("location" = String, description = "Path of the new item"))),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Item>), ApiError> {
    let Json(input) = payload?;

    let mut conn = state.store.acquire().await?;
    let item = ItemRepository::new(&mut conn).create(input).await?;

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, routes::item_location(item.id))],
        Json(item),
    ))
}
