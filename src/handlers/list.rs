use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/items handler - List every item
///
/// No paging or filtering: the whole table is returned.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let mut conn = state.store.acquire().await?;
    let items = ItemRepository::new(&mut conn).list().await?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::*;

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let app = setup_test_app().await;

        let response = send(&app, "GET", "/api/items", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"[]".to_vec());
    }

    #[tokio::test]
    async fn test_list_endpoint_with_data() {
        let app = setup_test_app().await;

        for (name, done) in [("first", false), ("second", true)] {
            let response = send(
                &app,
                "POST",
                "/api/items",
                Some(serde_json::json!({"name": name, "isComplete": done})),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = send(&app, "GET", "/api/items", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let mut items: Vec<Item> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        items.sort_by_key(|item| item.id);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "first");
        assert!(!items[0].is_complete);
        assert_eq!(items[1].name, "second");
        assert!(items[1].is_complete);
    }

    #[tokio::test]
    async fn test_list_excludes_deleted() {
        let app = setup_test_app().await;

        send(&app, "POST", "/api/items", Some(serde_json::json!({"name": "a"}))).await;
        send(&app, "POST", "/api/items", Some(serde_json::json!({"name": "b"}))).await;

        let response = send(&app, "DELETE", "/api/items/1", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", "/api/items", None).await;
        let items: Vec<Item> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|item| item.id != 1));
    }
}
