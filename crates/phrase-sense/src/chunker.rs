//! Noun phrase detection
//!
//! Identifies noun phrases by pattern matching on POS tags.
//! Pattern: (DT)? (JJ)* (NN)

use crate::types::{TaggedToken, ADJECTIVE_TAG, ARTICLE_TAG, NOUN_TAG};

/// A noun phrase span within a tagged sentence. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSpan {
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    /// The words covered by this span, joined with spaces.
    pub fn phrase(&self, tokens: &[TaggedToken]) -> String {
        tokens[self.start..self.end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Configuration for noun phrase detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Whether a leading determiner is part of the phrase
    pub include_determiners: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            include_determiners: true,
        }
    }
}

/// Noun phrase detector
#[derive(Debug, Clone, Default)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl NounChunker {
    /// Create a chunker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with custom config
    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Extract noun phrase spans from a tagged sentence.
    ///
    /// Pattern: (DT)? (JJ)* (NN)
    pub fn extract_chunks(&self, tokens: &[TaggedToken]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if let Some(span) = self.match_noun_phrase(tokens, i) {
                i = span.end;
                chunks.push(span);
                continue;
            }
            i += 1;
        }

        chunks
    }

    /// Try to match a noun phrase starting at position `start`.
    fn match_noun_phrase(&self, tokens: &[TaggedToken], start: usize) -> Option<ChunkSpan> {
        let mut i = start;
        let mut phrase_start = start;

        if i < tokens.len() && tokens[i].tag == ARTICLE_TAG {
            i += 1;
            if !self.config.include_determiners {
                phrase_start = i;
            }
        }

        while i < tokens.len() && tokens[i].tag == ADJECTIVE_TAG {
            i += 1;
        }

        if i < tokens.len() && tokens[i].tag == NOUN_TAG {
            return Some(ChunkSpan {
                start: phrase_start,
                end: i + 1,
            });
        }

        None
    }
}
