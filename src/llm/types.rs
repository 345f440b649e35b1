use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Single-turn request carrying the whole prompt as one user message.
    /// All conversational context lives inside the prompt string; the
    /// completion service itself is stateless per call.
    pub fn from_prompt(prompt: &str) -> Self {
        Self::new(vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }])
    }
}
