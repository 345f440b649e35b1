//! Offline ingestion: build the similarity index from a directory of
//! plain-text corpus files. Runs once before the server is ever started.

use std::env;
use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context};

use nyaya_backend::core::config::{AppPaths, ConfigService};
use nyaya_backend::llm::openai::OpenAiProvider;
use nyaya_backend::llm::provider::LlmProvider;
use nyaya_backend::rag::chunker::{chunk_text, ChunkerConfig};
use nyaya_backend::rag::sqlite::SqliteVectorStore;
use nyaya_backend::rag::store::{StoredChunk, VectorStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let corpus_dir = env::args()
        .nth(1)
        .context("usage: nyaya-ingest <corpus-dir>")?;

    let paths = Arc::new(AppPaths::new());
    let config = ConfigService::new(paths.clone()).load()?;

    let index_path = config
        .rag
        .index_path
        .clone()
        .unwrap_or_else(|| paths.index_path.clone());
    let store = SqliteVectorStore::create(index_path.clone()).await?;
    let llm = OpenAiProvider::new(config.llm.clone())?;

    let chunker = ChunkerConfig::default();
    let mut total = 0usize;

    for entry in fs::read_dir(&corpus_dir)
        .with_context(|| format!("Failed to read corpus dir {}", corpus_dir))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let Ok(text) = fs::read_to_string(&path) else {
            eprintln!("Skipping non-text file {}", path.display());
            continue;
        };

        let source = path.to_string_lossy().to_string();
        let chunks = chunk_text(&text, &chunker);
        if chunks.is_empty() {
            continue;
        }

        let inputs: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = llm.embed(&inputs).await?;
        if embeddings.len() != chunks.len() {
            bail!(
                "embedding count mismatch for {}: {} chunks, {} vectors",
                source,
                chunks.len(),
                embeddings.len()
            );
        }

        let items: Vec<(StoredChunk, Vec<f32>)> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| {
                (
                    StoredChunk {
                        chunk_id: format!("{}#{}", source, chunk.chunk_index),
                        content: chunk.text,
                        source: source.clone(),
                        metadata: None,
                    },
                    embedding,
                )
            })
            .collect();

        total += items.len();
        store.insert_batch(items).await?;
        println!("Indexed {}", source);
    }

    println!("Indexed {} chunks into {}", total, index_path.display());
    Ok(())
}
