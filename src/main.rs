mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod repository;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;
use store::Store;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("todo-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = Store::from_config(&config).await?;

    let state = AppState {
        store,
        config: Arc::new(config),
    };
    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("API docs at http://{}{}", addr, routes::SWAGGER_UI);

    axum::serve(listener, app::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
