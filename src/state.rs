use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::assistant::AnswerService;
use crate::core::config::{AppConfig, AppPaths, ConfigService};
use crate::llm::openai::OpenAiProvider;
use crate::llm::provider::LlmProvider;
use crate::rag::retriever::Retriever;
use crate::rag::sqlite::SqliteVectorStore;
use crate::rag::store::VectorStore;

#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub config: AppConfig,
    pub store: Arc<dyn VectorStore>,
    pub llm: Arc<dyn LlmProvider>,
    pub assistant: AnswerService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub async fn initialize() -> anyhow::Result<Arc<Self>> {
        let paths = Arc::new(AppPaths::new());
        let config = ConfigService::new(paths.clone()).load()?;

        // A missing index file is fatal: the serving path never builds the
        // index, only the offline ingestion tool does.
        let index_path = config
            .rag
            .index_path
            .clone()
            .unwrap_or_else(|| paths.index_path.clone());
        let store: Arc<dyn VectorStore> = Arc::new(SqliteVectorStore::open(index_path).await?);

        let llm: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::new(config.llm.clone())?);
        let retriever = Retriever::new(store.clone(), llm.clone(), config.rag.top_k);
        let assistant = AnswerService::new(retriever, llm.clone(), config.rag.max_context_chars);
        let started_at = Utc::now();

        Ok(Arc::new(AppState {
            paths,
            config,
            store,
            llm,
            assistant,
            started_at,
        }))
    }
}
