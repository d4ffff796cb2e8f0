//! Rule-based tagger backend
//!
//! A small closed-class lexicon plus suffix heuristics. Good enough to drive
//! the extractor in demos and tests; anything it cannot place is tagged `NN`.

use crate::tagger::PosTagger;
use crate::types::TaggedToken;

const ARTICLES: &[&str] = &["the", "a", "an"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

const ADJECTIVES: &[&str] = &[
    "big", "small", "red", "blue", "green", "good", "bad", "new", "old", "fast", "slow",
    "great", "nice", "loud", "quiet", "happy", "sad", "hot", "cold",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less"];

pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str) -> &'static str {
        let lower = word.to_lowercase();

        if !word.chars().any(char::is_alphanumeric) {
            return ".";
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if ARTICLES.contains(&lower.as_str()) {
            return "DT";
        }
        if PRONOUNS.contains(&lower.as_str()) {
            return "PRP";
        }
        match lower.as_str() {
            "is" | "was" | "has" | "does" => return "VBZ",
            "am" | "are" | "were" | "have" | "do" => return "VBP",
            "be" | "been" | "being" => return "VB",
            _ => {}
        }
        if lower.ends_with("ly") {
            return "RB";
        }
        if ADJECTIVES.contains(&lower.as_str())
            || ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
        {
            return "JJ";
        }
        if lower.ends_with("ing") {
            return "VBG";
        }
        if lower.ends_with('s') && lower.len() > 3 {
            return "NNS";
        }
        "NN"
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[String]) -> Vec<TaggedToken> {
        words
            .iter()
            .map(|word| TaggedToken::new(word.clone(), self.tag_word(word)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_all(words: &[&str]) -> Vec<TaggedToken> {
        let owned: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        LexiconTagger::new().tag(&owned)
    }

    #[test]
    fn tags_a_simple_noun_phrase() {
        let tagged = tag_all(&["the", "big", "red", "car"]);
        let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["DT", "JJ", "JJ", "NN"]);
    }

    #[test]
    fn punctuation_gets_the_period_tag() {
        let tagged = tag_all(&["?"]);
        assert_eq!(tagged[0].tag, ".");
    }

    #[test]
    fn closed_classes_are_recognized() {
        let tagged = tag_all(&["they", "are", "quickly"]);
        let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["PRP", "VBP", "RB"]);
    }

    #[test]
    fn unknown_words_default_to_noun() {
        let tagged = tag_all(&["flibbertigibbet"]);
        assert_eq!(tagged[0].tag, "NN");
    }
}
