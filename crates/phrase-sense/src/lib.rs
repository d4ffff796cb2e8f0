//! phrase-sense: phrase sentiment extraction over part-of-speech tagged text
//!
//! This crate turns free-form request text into a `(noun, dominant word)`
//! pair: tokenize a sentence, tag it with a [`PosTagger`] backend, optionally
//! pick out noun phrases, and run the extractor over the tagged tokens.

mod error;
pub use error::{Error, Result};

mod types;
pub use types::{Extraction, TaggedToken, ADJECTIVE_TAG, ARTICLE_TAG, NOUN_TAG};

mod structure;
pub use structure::{PosRole, StructureSpec};

mod extract;
pub use extract::{count_occurrences, extract, DEFAULT_STRUCTURE};

mod chunker;
pub use chunker::{ChunkSpan, ChunkerConfig, NounChunker};

pub mod tokenize;

mod tagger;
pub use tagger::{new_tagger_backend, PosTagger, TaggerBackendKind};

#[cfg(feature = "mock")]
mod lexicon;
#[cfg(feature = "mock")]
pub use lexicon::LexiconTagger;

/// Initialize the phrase extraction system
pub fn init() -> Result<()> {
    tracing::info!("Initializing phrase-sense");
    Ok(())
}

/// Tokenize, tag, and extract every sentence of a request, using the
/// default sentence structure.
///
/// # Errors
///
/// Propagates structure validation errors from [`extract`].
pub fn analyze(text: &str, tagger: &dyn PosTagger) -> Result<Vec<Extraction>> {
    let mut results = Vec::new();
    for sentence in tokenize::sentences(text) {
        let tagged = tagger.tag(&sentence);
        results.push(extract(&tagged, DEFAULT_STRUCTURE)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_raw_text_end_to_end() {
        let tagger = LexiconTagger::new();
        let results = analyze("the big big red car", &tagger).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].noun, "car");
        assert_eq!(results[0].dominant, "big");
    }

    #[test]
    fn analyzes_each_sentence_separately() {
        let tagger = LexiconTagger::new();
        let results = analyze("the loud dog. the red car.", &tagger).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].noun, "dog");
        assert_eq!(results[1].noun, "car");
    }
}
