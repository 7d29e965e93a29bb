use crate::error::{ApiError, ErrorResponse};
use crate::repository::ItemRepository;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
};

/// DELETE /api/items/{id} handler - Remove an item permanently
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with that id, or id is not an integer"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    let mut conn = state.store.acquire().await?;
    if ItemRepository::new(&mut conn).delete(id).await? {
        tracing::info!("Successfully deleted item with id: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::info!("Item not found with id: {}", id);
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::*;

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let app = setup_test_app().await;

        send(&app, "POST", "/api/items", Some(serde_json::json!({"name": "Buy milk"}))).await;

        let response = send(&app, "DELETE", "/api/items/1", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());

        let response = send(&app, "GET", "/api/items/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let app = setup_test_app().await;

        send(&app, "POST", "/api/items", Some(serde_json::json!({"name": "once"}))).await;

        let first = send(&app, "DELETE", "/api/items/1", None).await;
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = send(&app, "DELETE", "/api/items/1", None).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(second).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_endpoint_non_integer_id() {
        let app = setup_test_app().await;

        send(&app, "POST", "/api/items", Some(serde_json::json!({"name": "keep"}))).await;

        let response = send(&app, "DELETE", "/api/items/1.5", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());

        let kept = send(&app, "GET", "/api/items/1", None).await;
        assert_eq!(kept.status(), StatusCode::OK);
    }
}
