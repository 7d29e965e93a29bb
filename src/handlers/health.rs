use crate::models::HealthStatus;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - 503 when the item store cannot answer `SELECT 1`
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Store reachable", body = HealthStatus),
        (status = 503, description = "Store unreachable", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let (code, status) = match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            HealthStatus {
                status: "healthy".to_string(),
                error: None,
            },
        ),
        Err(e) => {
            tracing::warn!("Item store unreachable: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthStatus {
                    status: "unhealthy".to_string(),
                    error: Some(format!("Item store unreachable: {}", e)),
                },
            )
        }
    };

    (code, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{router, testing::*};

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = setup_test_app().await;

        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, br#"{"status":"healthy"}"#.to_vec());
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let state = setup_test_state().await;
        state.store.close().await;
        let app = router(state);

        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let status: HealthStatus = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(status.status, "unhealthy");
        assert!(status.error.unwrap().contains("Item store unreachable"));
    }
}
