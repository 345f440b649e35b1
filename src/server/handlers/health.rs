use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::assistant::Language;
use crate::core::errors::ApiError;
use crate::state::AppState;

pub async fn health(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let indexed_chunks = state.store.count().await.unwrap_or(0);
    let languages: Vec<&str> = Language::ALL.iter().map(|lang| lang.label()).collect();

    Ok(Json(json!({
        "initialized": true,
        "indexed_chunks": indexed_chunks,
        "languages": languages,
        "started_at": state.started_at.to_rfc3339(),
    })))
}
