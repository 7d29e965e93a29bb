use crate::routes;

/// GET / handler - Plain text liveness message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is running", body = String,
            content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn root_handler() -> &'static str {
    "Todo API running"
}

#[cfg(test)]
mod tests {
    use crate::app::testing::{body_bytes, send, setup_test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = setup_test_app().await;

        let response = send(&app, "GET", "/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_bytes(response).await, b"Todo API running".to_vec());
    }
}
