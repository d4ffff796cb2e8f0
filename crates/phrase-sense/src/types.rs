use serde::{Deserialize, Serialize};

/// Tag emitted for articles/determiners.
pub const ARTICLE_TAG: &str = "DT";
/// Tag emitted for singular nouns.
pub const NOUN_TAG: &str = "NN";
/// Tag emitted for adjectives.
pub const ADJECTIVE_TAG: &str = "JJ";

/// A word paired with its part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The word as it appeared in the sentence
    pub text: String,
    /// Part-of-speech label assigned by a tagger
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Whether this token is an article/determiner
    pub fn is_article(&self) -> bool {
        self.tag == ARTICLE_TAG
    }

    /// Whether this token is a singular noun
    pub fn is_noun(&self) -> bool {
        self.tag == NOUN_TAG
    }
}

/// Result of running the extractor over one tagged sentence.
///
/// Either field may be empty: `noun` when the sentence carried no noun tag,
/// `dominant` when every token was an article or a noun.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The head noun of the sentence
    pub noun: String,
    /// The most frequently repeated descriptive word
    pub dominant: String,
}
