//! Reference derivation from retrieved passages.
//!
//! References are per-request display records; nothing here is persisted.

use serde::Serialize;

use crate::rag::retriever::Passage;

use super::labels::document_label;

/// At most this many references accompany an answer.
pub const MAX_REFERENCES: usize = 4;
/// Excerpt budget in characters before the ellipsis is appended.
pub const EXCERPT_CHARS: usize = 200;

pub const SYNTHETIC_DOCUMENT: &str = "Generated Reference";
/// Emitted when the synthetic-reference call itself fails. This path must
/// never error: a successful answer is not discarded over citations.
pub const FALLBACK_REFERENCE: &str = "Reference: Based on general knowledge of Indian law";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Retrieved,
    Synthetic,
}

/// A citation-like summary shown alongside the answer.
#[derive(Debug, Clone, Serialize)]
pub struct Reference {
    pub document: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
}

/// Build references from retrieved passages, best first, capped at
/// `MAX_REFERENCES`. An empty passage text still contributes a reference
/// with an empty excerpt.
pub fn retrieved_references(passages: &[Passage]) -> Vec<Reference> {
    passages
        .iter()
        .take(MAX_REFERENCES)
        .map(|passage| Reference {
            document: document_label(&passage.source).to_string(),
            content: excerpt(&passage.text),
            kind: ReferenceKind::Retrieved,
        })
        .collect()
}

pub fn synthetic_reference(content: String) -> Reference {
    Reference {
        document: SYNTHETIC_DOCUMENT.to_string(),
        content,
        kind: ReferenceKind::Synthetic,
    }
}

pub fn fallback_reference() -> Reference {
    synthetic_reference(FALLBACK_REFERENCE.to_string())
}

/// First `EXCERPT_CHARS` characters of the passage, ellipsis-suffixed when
/// truncated, the whole text otherwise.
fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    if text.chars().count() > EXCERPT_CHARS {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str, source: &str) -> Passage {
        Passage {
            text: text.to_string(),
            source: source.to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn caps_at_four_references_in_retrieval_order() {
        let passages: Vec<Passage> = (0..5)
            .map(|i| passage(&format!("passage {}", i), "data/IPC_1860.pdf"))
            .collect();

        let refs = retrieved_references(&passages);
        assert_eq!(refs.len(), 4);
        assert_eq!(refs[0].content, "passage 0");
        assert_eq!(refs[3].content, "passage 3");
        assert!(refs.iter().all(|r| r.kind == ReferenceKind::Retrieved));
        assert!(refs.iter().all(|r| r.document == "Indian Penal Code (IPC) 1860"));
    }

    #[test]
    fn long_passages_get_prefix_excerpts_with_ellipsis() {
        let text = "x".repeat(500);
        let refs = retrieved_references(&[passage(&text, "doc.pdf")]);

        let content = &refs[0].content;
        assert_eq!(content.chars().count(), EXCERPT_CHARS + 3);
        assert!(content.ends_with("..."));
        assert!(text.starts_with(content.trim_end_matches("...")));
    }

    #[test]
    fn short_and_empty_passages_pass_through() {
        let refs = retrieved_references(&[passage("short text", "doc.pdf"), passage("", "")]);
        assert_eq!(refs[0].content, "short text");
        assert_eq!(refs[1].content, "");
        assert_eq!(refs[1].document, "Unknown Document");
    }

    #[test]
    fn fallback_reference_is_synthetic_with_fixed_text() {
        let reference = fallback_reference();
        assert_eq!(reference.kind, ReferenceKind::Synthetic);
        assert_eq!(reference.content, FALLBACK_REFERENCE);
        assert_eq!(reference.document, SYNTHETIC_DOCUMENT);
    }
}
