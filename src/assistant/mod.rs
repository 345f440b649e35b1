//! Answer orchestration: question + history + language in, answer with
//! citation-like references out.
//!
//! One retrieval, one prompt, one completion call, then reference
//! derivation. No conversation state is stored here; the caller owns the
//! transcript.

mod labels;
mod language;
mod orchestrator;
mod prompt;
mod references;

pub use language::Language;
pub use orchestrator::{AnswerResult, AnswerService};
pub use references::{Reference, ReferenceKind};
