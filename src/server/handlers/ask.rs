use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::assistant::Language;
use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Role-labeled transcript, most recent turn last. Owned by the caller;
    /// passed through to the prompt untouched.
    #[serde(default)]
    pub history: String,
    pub language: Option<String>,
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_string()));
    }

    let language = Language::parse(payload.language.as_deref().unwrap_or(""));

    let result = state
        .assistant
        .answer(question, &payload.history, language)
        .await?;

    Ok(Json(result))
}

pub async fn list_languages(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    let languages: Vec<Value> = Language::ALL
        .iter()
        .map(|lang| json!({ "id": lang.label().to_lowercase(), "label": lang.label() }))
        .collect();

    Json(json!({ "languages": languages }))
}
