//! Sentence and word tokenization
//!
//! Splits raw request text into sentences on terminating punctuation, then
//! splits each sentence into word tokens with punctuation peeled off into
//! tokens of its own, so a trailing `?` survives as a token the caller can
//! test for.

/// Split text into sentences, each already split into word tokens.
pub fn sentences(text: &str) -> Vec<Vec<String>> {
    split_sentences(text)
        .iter()
        .map(|sentence| words(sentence))
        .collect()
}

/// Split text into sentence strings, keeping the terminator with its sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// Split one sentence into word tokens. Apostrophes and hyphens stay inside
/// words; any other punctuation becomes a single-character token.
pub fn words(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in sentence.chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '-' {
            current.push(ch);
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_and_words() {
        let processed = sentences("Hello assistant. What time is it?");
        assert_eq!(
            processed,
            vec![
                vec!["Hello", "assistant", "."],
                vec!["What", "time", "is", "it", "?"],
            ]
        );
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        let processed = sentences("open youtube");
        assert_eq!(processed, vec![vec!["open", "youtube"]]);
    }

    #[test]
    fn question_mark_is_its_own_token() {
        let toks = words("is it fast?");
        assert!(toks.contains(&"?".to_string()));
    }

    #[test]
    fn apostrophes_stay_in_words() {
        assert_eq!(words("what's up"), vec!["what's", "up"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(sentences("").is_empty());
        assert!(sentences("   ").is_empty());
    }
}
