//! Phrase sentiment extraction
//!
//! Walks a part-of-speech-tagged sentence, separates out articles and the
//! head noun, and reports the most frequently repeated word among whatever
//! remains. The head noun is the last noun-tagged token in the sentence;
//! the dominant word is the first descriptor to reach the highest count.

use crate::error::Result;
use crate::structure::StructureSpec;
use crate::types::{Extraction, TaggedToken};

/// Descriptor used when the caller has no opinion about sentence shape:
/// an article, then adjectives, then the noun being described.
pub const DEFAULT_STRUCTURE: &str = "dt,adj-1,noun";

/// Extract the head noun and dominant descriptive word from a tagged sentence.
///
/// The structure descriptor is validated up front and rejected before any
/// token is consumed; the partition itself keys on the article and noun tags.
/// Every sequence of tokens is otherwise acceptable, including an empty one —
/// missing nouns or descriptors yield empty fields, not errors.
///
/// # Errors
///
/// Returns [`crate::Error::UnknownRole`] when the descriptor names a role
/// outside the recognized vocabulary.
pub fn extract(tokens: &[TaggedToken], structure: &str) -> Result<Extraction> {
    let spec = StructureSpec::parse(structure)?;
    tracing::debug!(roles = spec.roles.len(), "structure descriptor accepted");

    let mut noun = String::new();
    let mut descriptors: Vec<String> = Vec::new();
    for token in tokens {
        if token.is_article() {
            continue;
        } else if token.is_noun() {
            // Later nouns overwrite earlier ones
            noun = token.text.clone();
        } else {
            descriptors.push(token.text.clone());
        }
    }

    let counted = count_occurrences(&descriptors);

    let mut current_max = 0;
    let mut dominant = String::new();
    for (word, count) in counted {
        if count > current_max {
            current_max = count;
            dominant = word;
        }
    }

    Ok(Extraction { noun, dominant })
}

/// Count, for each word in input order, how often it appears in the whole
/// input (itself included).
///
/// A word appearing k times produces k output pairs, each carrying the same
/// count. Kept as a self-join rather than a deduplicated table so the output
/// order mirrors the input order.
pub fn count_occurrences(words: &[String]) -> Vec<(String, usize)> {
    words
        .iter()
        .map(|word| {
            let n = words.iter().filter(|other| *other == word).count();
            (word.clone(), n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(text, tag)| TaggedToken::new(*text, *tag))
            .collect()
    }

    #[test]
    fn extracts_noun_and_dominant_adjective() {
        let tokens = toks(&[
            ("the", "DT"),
            ("big", "JJ"),
            ("big", "JJ"),
            ("red", "JJ"),
            ("car", "NN"),
        ]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.noun, "car");
        assert_eq!(result.dominant, "big");
    }

    #[test]
    fn empty_sentence_yields_empty_result() {
        let result = extract(&[], DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result, Extraction::default());
    }

    #[test]
    fn no_noun_tag_yields_empty_noun() {
        let tokens = toks(&[("quickly", "RB"), ("running", "VBG")]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.noun, "");
        assert_eq!(result.dominant, "quickly");
    }

    #[test]
    fn only_articles_and_nouns_yields_empty_dominant() {
        let tokens = toks(&[("the", "DT"), ("car", "NN")]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.noun, "car");
        assert_eq!(result.dominant, "");
    }

    #[test]
    fn last_noun_wins() {
        let tokens = toks(&[("cat", "NN"), ("is", "VBZ"), ("dog", "NN")]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.noun, "dog");
    }

    #[test]
    fn first_word_to_reach_max_count_wins_ties() {
        let tokens = toks(&[
            ("red", "JJ"),
            ("blue", "JJ"),
            ("red", "JJ"),
            ("blue", "JJ"),
        ]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.dominant, "red");
    }

    #[test]
    fn unrecognized_tags_are_treated_as_descriptors() {
        let tokens = toks(&[("wat", "XYZ"), ("wat", ""), ("car", "NN")]);
        let result = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(result.noun, "car");
        assert_eq!(result.dominant, "wat");
    }

    #[test]
    fn extraction_is_idempotent() {
        let tokens = toks(&[("the", "DT"), ("loud", "JJ"), ("dog", "NN")]);
        let first = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        let second = extract(&tokens, DEFAULT_STRUCTURE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_structure_fails_before_extraction() {
        let tokens = toks(&[("the", "DT"), ("car", "NN")]);
        assert!(extract(&tokens, "dt,zz,noun").is_err());
    }

    #[test]
    fn counts_are_self_inclusive() {
        let words: Vec<String> = ["red", "blue", "red"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let counted = count_occurrences(&words);
        assert_eq!(
            counted,
            vec![
                ("red".to_string(), 2),
                ("blue".to_string(), 1),
                ("red".to_string(), 2),
            ]
        );
    }

    #[test]
    fn counting_empty_input_is_empty() {
        assert!(count_occurrences(&[]).is_empty());
    }
}
