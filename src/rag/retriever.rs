//! Retriever adapter: question text in, scored passages out.
//!
//! The query is embedded via the LLM provider and matched against the index
//! with a fixed top-k. The raw question is used verbatim; prior turns are
//! not folded into the retrieval query.

use std::sync::Arc;

use crate::core::errors::ApiError;
use crate::llm::provider::LlmProvider;

use super::store::VectorStore;

/// A retrieved text chunk with its source identifier.
#[derive(Debug, Clone)]
pub struct Passage {
    pub text: String,
    /// Source file path of the legal document; may be empty.
    pub source: String,
    pub score: f32,
}

#[derive(Clone)]
pub struct Retriever {
    store: Arc<dyn VectorStore>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl Retriever {
    pub fn new(store: Arc<dyn VectorStore>, llm: Arc<dyn LlmProvider>, top_k: usize) -> Self {
        Self {
            store,
            llm,
            top_k: top_k.max(1),
        }
    }

    /// Return up to `top_k` passages ordered by descending similarity.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, ApiError> {
        let embeddings = self.llm.embed(&[query.to_string()]).await?;
        let query_embedding = embeddings
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Upstream("embedding service returned no vector".to_string()))?;

        let results = self.store.search(&query_embedding, self.top_k).await?;

        Ok(results
            .into_iter()
            .map(|result| Passage {
                text: result.chunk.content,
                source: result.chunk.source,
                score: result.score,
            })
            .collect())
    }
}
