use std::env;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use nyaya_backend::core;
use nyaya_backend::server;
use nyaya_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = AppState::initialize().await?;
    core::logging::init(&state.paths);

    tracing::info!("Using LLM provider '{}'", state.llm.name());
    match state.llm.health_check().await {
        Ok(true) => tracing::info!("LLM endpoint reachable"),
        _ => tracing::warn!("LLM endpoint not reachable; answers will fail until it is"),
    }

    let port = env::var("PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(8091);
    let bind_addr = format!("127.0.0.1:{}", port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    tracing::info!("Listening on {}", addr);

    let app: Router = server::router::router(state.clone());

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
