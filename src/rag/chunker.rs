//! Corpus text chunking for the ingestion side.
//!
//! Fixed-size overlapping windows measured in characters, trimmed back to a
//! sentence boundary when one falls near the end of the window.

#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks.
    pub chunk_overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextChunk {
    pub text: String,
    /// Position of this chunk within its source document.
    pub chunk_index: usize,
}

/// Split text into overlapping chunks. Whitespace-only windows are skipped.
pub fn chunk_text(text: &str, config: &ChunkerConfig) -> Vec<TextChunk> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let step = config
        .chunk_size
        .saturating_sub(config.chunk_overlap)
        .max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chunk_index = 0;

    while start < chars.len() {
        let end = (start + config.chunk_size).min(chars.len());
        let window: String = chars[start..end].iter().collect();

        let text = if end < chars.len() {
            trim_to_sentence_boundary(&window)
        } else {
            window.as_str()
        };
        let text = text.trim();

        if !text.is_empty() {
            chunks.push(TextChunk {
                text: text.to_string(),
                chunk_index,
            });
            chunk_index += 1;
        }

        start += step;
    }

    chunks
}

/// Cut the window back to the last sentence ending in its final fifth, if
/// any; otherwise keep the window as-is.
fn trim_to_sentence_boundary(window: &str) -> &str {
    const ENDINGS: [&str; 6] = [". ", "! ", "? ", ".\n", "!\n", "?\n"];

    let mut search_start = (window.len() * 4) / 5;
    while search_start > 0 && !window.is_char_boundary(search_start) {
        search_start -= 1;
    }

    let tail = &window[search_start..];
    for ending in ENDINGS {
        if let Some(pos) = tail.rfind(ending) {
            return &window[..search_start + pos + ending.len()];
        }
    }

    window
}
