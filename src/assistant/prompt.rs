//! Prompt assembly. One instruction-and-context string per request; the
//! completion service carries no session state of its own.

use crate::rag::retriever::Passage;

use super::language::Language;

/// Join passage texts in retrieval order with blank-line separators, capped
/// at `max_chars` characters. Whole passages are dropped once the cap is
/// reached; an oversized first passage is hard-truncated so the context is
/// never empty when passages exist.
pub fn build_context(passages: &[Passage], max_chars: usize) -> String {
    let mut context = String::new();
    let mut used = 0usize;

    for passage in passages {
        let len = passage.text.chars().count();

        if context.is_empty() {
            if len > max_chars {
                return passage.text.chars().take(max_chars).collect();
            }
            context.push_str(&passage.text);
            used = len;
            continue;
        }

        if used + 2 + len > max_chars {
            break;
        }
        context.push_str("\n\n");
        context.push_str(&passage.text);
        used += 2 + len;
    }

    context
}

/// The main answering prompt: domain restriction, language directive,
/// flattened history, retrieved context, then the question.
pub fn answer_prompt(question: &str, history: &str, context: &str, language: Language) -> String {
    format!(
        r#"You are an expert legal assistant specializing in Indian law.
You MUST ONLY answer questions related to Indian law, legal matters, including but not limited to:
- The Indian Constitution and its provisions
- Indian Penal Code (IPC) sections and offenses
- Code of Criminal Procedure (CrPC) and procedural law
- Bharatiya Nyaya Sanhita (BNS) 2024 and new criminal laws
- Supreme Court and High Court judgments
- Legal rights, procedures, and remedies in India
- Civil and criminal law matters in Indian jurisdiction

For any questions not related to Indian legal matters, politely inform the user that you can only assist with Indian legal topics.

{directive}

Use the following pieces of context to answer the user's question about Indian legal matters.
Prioritize information from the provided context when available.
If the context doesn't contain the specific information needed, you can use your general knowledge about Indian law to provide a helpful response.
When referencing legal provisions, always specify:
- IPC Section numbers (e.g., "Section 302 IPC")
- CrPC Section numbers (e.g., "Section 154 CrPC")
- BNS Section numbers (e.g., "Section 103 BNS")
- Constitutional Articles (e.g., "Article 21")
- Specific case names and citations when available

When using your general knowledge, clearly indicate this in your response.

Previous conversation:
{history}

Context:
{context}

Question: {question}"#,
        directive = language.directive(),
        history = history,
        context = context,
        question = question,
    )
}

/// Prompt for fabricating a citation when retrieval came back empty.
pub fn synthetic_reference_prompt(question: &str, answer: &str, language: Language) -> String {
    format!(
        r#"Based on the legal question and answer provided, generate a realistic legal reference citation.

Question: {question}
Answer: {answer}

Generate a reference in this format:
- Document: [Most likely Indian legal document name]
- Section/Article: [Relevant section or article number]
- Content: [Brief excerpt that would support the answer]

Use these document types when appropriate:
- Constitution of India (for fundamental rights, articles)
- Indian Penal Code (IPC) 1860 (for criminal offenses)
- Code of Criminal Procedure (CrPC) 1973 (for procedures)
- Bharatiya Nyaya Sanhita (BNS) 2024 (for new criminal laws)
- Supreme Court Judgments (for landmark cases)

Respond in {language}."#,
        question = question,
        answer = answer,
        language = language.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> Passage {
        Passage {
            text: text.to_string(),
            source: "doc.pdf".to_string(),
            score: 0.5,
        }
    }

    #[test]
    fn context_joins_passages_with_blank_lines() {
        let passages = vec![passage("first"), passage("second"), passage("third")];
        let context = build_context(&passages, 8000);
        assert_eq!(context, "first\n\nsecond\n\nthird");
    }

    #[test]
    fn context_drops_whole_passages_past_the_cap() {
        let passages = vec![passage(&"a".repeat(60)), passage(&"b".repeat(60))];
        let context = build_context(&passages, 100);
        assert_eq!(context, "a".repeat(60));
    }

    #[test]
    fn oversized_first_passage_is_hard_truncated() {
        let passages = vec![passage(&"a".repeat(300))];
        let context = build_context(&passages, 100);
        assert_eq!(context.chars().count(), 100);
    }

    #[test]
    fn answer_prompt_carries_all_sections() {
        let prompt = answer_prompt(
            "What is Section 302?",
            "User: hello\nAssistant: hi",
            "Section 302 deals with murder.",
            Language::Hindi,
        );

        assert!(prompt.contains("expert legal assistant"));
        assert!(prompt.contains(Language::Hindi.directive()));
        assert!(prompt.contains("User: hello"));
        assert!(prompt.contains("Section 302 deals with murder."));
        assert!(prompt.ends_with("Question: What is Section 302?"));
    }

    #[test]
    fn synthetic_prompt_names_the_response_language() {
        let prompt = synthetic_reference_prompt("q", "a", Language::Bengali);
        assert!(prompt.contains("Respond in Bengali."));
        assert!(prompt.contains("realistic legal reference citation"));
    }
}
