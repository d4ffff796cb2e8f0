//! Part-of-speech tagger seam
//!
//! Tagging itself is delegated to a backend; the extractor only consumes the
//! resulting tagged tokens.

use crate::types::TaggedToken;

/// A part-of-speech tagger: one tag per word, from a fixed tag vocabulary
/// that includes at least `DT` (article) and `NN` (singular noun).
pub trait PosTagger {
    /// Assign a part-of-speech label to each word of one sentence.
    fn tag(&self, words: &[String]) -> Vec<TaggedToken>;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TaggerBackendKind {
    Lexicon,
    Treebank,
    Onnx,
}

pub fn new_tagger_backend(
    kind: TaggerBackendKind,
) -> Result<Box<dyn PosTagger + Send>, String> {
    match kind {
        TaggerBackendKind::Lexicon => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(crate::LexiconTagger::new()))
            }
            #[cfg(not(feature = "mock"))]
            {
                Err("mock feature not enabled".into())
            }
        }
        TaggerBackendKind::Treebank => Err("treebank backend not yet integrated".into()),
        TaggerBackendKind::Onnx => Err("onnx_tagger backend not yet integrated".into()),
    }
}
