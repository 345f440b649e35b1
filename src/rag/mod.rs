//! Retrieval over the pre-built legal corpus index.
//!
//! This module provides:
//! - `VectorStore`: abstract interface over the similarity index
//! - `SqliteVectorStore`: the embedded SQLite-backed index
//! - `Retriever`: query embedding + top-k search returning `Passage`s

pub mod chunker;
pub mod retriever;
pub mod sqlite;
pub mod store;
