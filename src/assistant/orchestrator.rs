//! The answer orchestrator. Sequential and synchronous per request:
//! retrieval first, then the main completion, then (only when retrieval was
//! empty) the synthetic-reference completion. No partial result is ever
//! returned.

use std::sync::Arc;

use serde::Serialize;

use crate::core::errors::ApiError;
use crate::llm::provider::LlmProvider;
use crate::llm::types::CompletionRequest;
use crate::rag::retriever::Retriever;

use super::language::Language;
use super::prompt;
use super::references::{self, Reference};

/// Answer text plus its ordered references. Lives for one request cycle.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResult {
    pub answer: String,
    pub references: Vec<Reference>,
}

#[derive(Clone)]
pub struct AnswerService {
    retriever: Retriever,
    llm: Arc<dyn LlmProvider>,
    max_context_chars: usize,
}

impl AnswerService {
    pub fn new(retriever: Retriever, llm: Arc<dyn LlmProvider>, max_context_chars: usize) -> Self {
        Self {
            retriever,
            llm,
            max_context_chars,
        }
    }

    /// Answer a question against the legal corpus.
    ///
    /// Retrieval uses the raw question only; `history` is embedded in the
    /// prompt but never rewritten into the retrieval query.
    pub async fn answer(
        &self,
        question: &str,
        history: &str,
        language: Language,
    ) -> Result<AnswerResult, ApiError> {
        let passages = self
            .retriever
            .retrieve(question)
            .await
            .map_err(|err| localize(err, language))?;
        tracing::debug!("Retrieved {} passages", passages.len());

        let context = prompt::build_context(&passages, self.max_context_chars);
        let request =
            CompletionRequest::from_prompt(&prompt::answer_prompt(question, history, &context, language));
        let answer = self
            .llm
            .complete(request)
            .await
            .map_err(|err| localize(err, language))?;

        let references = if passages.is_empty() {
            vec![self.synthetic_reference(question, &answer, language).await]
        } else {
            references::retrieved_references(&passages)
        };

        Ok(AnswerResult { answer, references })
    }

    /// Fabricate a citation for an answer produced without passages. Never
    /// fails: a broken enrichment call degrades to the fixed fallback text.
    async fn synthetic_reference(
        &self,
        question: &str,
        answer: &str,
        language: Language,
    ) -> Reference {
        let request = CompletionRequest::from_prompt(&prompt::synthetic_reference_prompt(
            question, answer, language,
        ));

        match self.llm.complete(request).await {
            Ok(content) => references::synthetic_reference(content),
            Err(err) => {
                tracing::warn!("Synthetic reference generation failed: {}", err);
                references::fallback_reference()
            }
        }
    }
}

/// Wrap upstream failures in language-appropriate text; configuration and
/// other kinds pass through untouched.
fn localize(err: ApiError, language: Language) -> ApiError {
    match err {
        ApiError::Upstream(msg) => {
            ApiError::Upstream(format!("{} ({})", language.upstream_error_text(), msg))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::assistant::references::{ReferenceKind, FALLBACK_REFERENCE};
    use crate::rag::store::{ChunkSearchResult, StoredChunk, VectorStore};

    struct FakeStore {
        results: Vec<ChunkSearchResult>,
        fail: bool,
    }

    #[async_trait]
    impl VectorStore for FakeStore {
        async fn search(
            &self,
            _query_embedding: &[f32],
            limit: usize,
        ) -> Result<Vec<ChunkSearchResult>, ApiError> {
            if self.fail {
                return Err(ApiError::Configuration("index not built".to_string()));
            }
            Ok(self.results.iter().take(limit).cloned().collect())
        }

        async fn count(&self) -> Result<usize, ApiError> {
            Ok(self.results.len())
        }

        async fn insert_batch(
            &self,
            _items: Vec<(StoredChunk, Vec<f32>)>,
        ) -> Result<(), ApiError> {
            Ok(())
        }
    }

    struct FakeLlm {
        /// Responses returned by successive `complete` calls; a `None` slot
        /// simulates an upstream failure at that position.
        completions: Vec<Option<String>>,
        calls: AtomicUsize,
    }

    impl FakeLlm {
        fn new(completions: Vec<Option<String>>) -> Self {
            Self {
                completions,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for FakeLlm {
        fn name(&self) -> &str {
            "fake"
        }

        async fn health_check(&self) -> Result<bool, ApiError> {
            Ok(true)
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, ApiError> {
            let idx = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.completions.get(idx) {
                Some(Some(text)) => Ok(text.clone()),
                _ => Err(ApiError::Upstream("completion failed".to_string())),
            }
        }

        async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ApiError> {
            Ok(inputs.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }

    fn chunk_result(content: &str, source: &str, score: f32) -> ChunkSearchResult {
        ChunkSearchResult {
            chunk: StoredChunk {
                chunk_id: format!("c-{}", score),
                content: content.to_string(),
                source: source.to_string(),
                metadata: None,
            },
            score,
        }
    }

    fn service(store: FakeStore, llm: FakeLlm) -> AnswerService {
        let llm: Arc<dyn LlmProvider> = Arc::new(llm);
        let retriever = Retriever::new(Arc::new(store), llm.clone(), 5);
        AnswerService::new(retriever, llm, 8000)
    }

    #[tokio::test]
    async fn five_passages_yield_four_retrieved_references() {
        let results: Vec<ChunkSearchResult> = (0..5)
            .map(|i| chunk_result(&format!("passage {}", i), "data/IPC_1860.pdf", 1.0 - i as f32 * 0.1))
            .collect();
        let svc = service(
            FakeStore { results, fail: false },
            FakeLlm::new(vec![Some("Section 302 IPC applies.".to_string())]),
        );

        let result = svc.answer("What about murder?", "", Language::English).await.unwrap();

        assert_eq!(result.answer, "Section 302 IPC applies.");
        assert_eq!(result.references.len(), 4);
        assert!(result
            .references
            .iter()
            .all(|r| r.kind == ReferenceKind::Retrieved));
        assert_eq!(result.references[0].content, "passage 0");
    }

    #[tokio::test]
    async fn single_passage_yields_single_reference() {
        let svc = service(
            FakeStore {
                results: vec![chunk_result("Article 21 text", "constitution.pdf", 0.9)],
                fail: false,
            },
            FakeLlm::new(vec![Some("answer".to_string())]),
        );

        let result = svc.answer("q", "", Language::English).await.unwrap();
        assert_eq!(result.references.len(), 1);
        assert_eq!(result.references[0].document, "Constitution of India");
    }

    #[tokio::test]
    async fn empty_retrieval_produces_one_synthetic_reference() {
        let svc = service(
            FakeStore { results: vec![], fail: false },
            FakeLlm::new(vec![
                Some("general-knowledge answer".to_string()),
                Some("Document: Constitution of India".to_string()),
            ]),
        );

        let result = svc.answer("q", "", Language::English).await.unwrap();

        assert_eq!(result.references.len(), 1);
        assert_eq!(result.references[0].kind, ReferenceKind::Synthetic);
        assert_eq!(result.references[0].content, "Document: Constitution of India");
    }

    #[tokio::test]
    async fn failed_synthetic_call_degrades_to_fallback_text() {
        let svc = service(
            FakeStore { results: vec![], fail: false },
            FakeLlm::new(vec![Some("the answer".to_string()), None]),
        );

        let result = svc.answer("q", "", Language::English).await.unwrap();

        assert_eq!(result.answer, "the answer");
        assert_eq!(result.references.len(), 1);
        assert_eq!(result.references[0].kind, ReferenceKind::Synthetic);
        assert_eq!(result.references[0].content, FALLBACK_REFERENCE);
    }

    #[tokio::test]
    async fn store_failure_propagates_without_partial_result() {
        let svc = service(
            FakeStore { results: vec![], fail: true },
            FakeLlm::new(vec![Some("never reached".to_string())]),
        );

        let err = svc.answer("q", "", Language::English).await.err().unwrap();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[tokio::test]
    async fn completion_failure_surfaces_localized_upstream_error() {
        let svc = service(
            FakeStore {
                results: vec![chunk_result("text", "ipc.pdf", 0.8)],
                fail: false,
            },
            FakeLlm::new(vec![None]),
        );

        let err = svc.answer("q", "", Language::Hindi).await.err().unwrap();
        match err {
            ApiError::Upstream(msg) => {
                assert!(msg.contains(Language::Hindi.upstream_error_text()));
                assert!(msg.contains("completion failed"));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_passage_text_still_contributes_a_reference() {
        let svc = service(
            FakeStore {
                results: vec![chunk_result("", "", 0.5)],
                fail: false,
            },
            FakeLlm::new(vec![Some("answer".to_string())]),
        );

        let result = svc.answer("q", "", Language::English).await.unwrap();
        assert_eq!(result.references.len(), 1);
        assert_eq!(result.references[0].content, "");
        assert_eq!(result.references[0].document, "Unknown Document");
    }
}
