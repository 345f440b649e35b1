//! Backend for a conversational Indian-law assistant.
//!
//! Retrieval-augmented answering: embed the question, search a pre-built
//! SQLite similarity index over the legal corpus, prompt an OpenAI-compatible
//! completion endpoint, and derive citation-like references.

pub mod assistant;
pub mod core;
pub mod llm;
pub mod rag;
pub mod server;
pub mod state;
