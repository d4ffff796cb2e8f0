//! Pattern matching for natural language assistant requests

use crate::ParserConfig;
use regex::Regex;
use web_actions::Site;

/// Result of parsing a request
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed intent
    pub intent: Intent,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f32,
    /// Normalized request text
    pub text: String,
}

/// What the user is asking the assistant to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search the web and read back the first result
    WebSearch { query: String },
    /// Look the topic up in the encyclopedia
    Encyclopedia { topic: String },
    /// Open a known site in a browser tab
    OpenSite(Site),
    /// A question; answered with a remark plus a search
    Question,
    /// Free-form text routed to the phrase analysis pass
    Describe,
}

/// Main request parser
pub struct RequestParser {
    config: ParserConfig,
    // Ordered so explicit request phrases win over the question catch-all
    patterns: Vec<(String, Regex)>,
}

impl RequestParser {
    /// Create a new request parser
    pub fn new(config: ParserConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut patterns = Vec::new();

        patterns.push((
            "web_search".to_string(),
            Regex::new(r"(?i)search the internet for\s+(.+)")?,
        ));
        patterns.push((
            "wikipedia".to_string(),
            Regex::new(r"(?i)do a wikipedia search for\s+(.+)")?,
        ));
        patterns.push(("open_youtube".to_string(), Regex::new(r"(?i)open youtube")?));
        patterns.push(("open_google".to_string(), Regex::new(r"(?i)open google")?));
        patterns.push(("question".to_string(), Regex::new(r"\?")?));

        for (name, pattern) in &config.custom_patterns {
            patterns.push((name.clone(), Regex::new(pattern)?));
        }

        Ok(Self { config, patterns })
    }

    /// Parse a request into a structured intent.
    ///
    /// Unmatched requests fall through to [`Intent::Describe`] rather than
    /// failing; the free-form pass downstream decides what to do with them.
    pub fn parse(&self, text: &str) -> ParseResult {
        let text = text.trim().to_lowercase();

        for (pattern_name, regex) in &self.patterns {
            if let Some(captures) = regex.captures(&text) {
                if let Some(intent) = Self::build_intent(pattern_name, &captures) {
                    let confidence = self.calculate_confidence(pattern_name, &text);
                    if confidence >= self.config.confidence_threshold {
                        return ParseResult {
                            intent,
                            confidence,
                            text,
                        };
                    }
                }
            }
        }

        ParseResult {
            intent: Intent::Describe,
            confidence: 0.5, // Lower confidence for fallback
            text,
        }
    }

    fn build_intent(pattern_name: &str, captures: &regex::Captures) -> Option<Intent> {
        match pattern_name {
            "web_search" => {
                let query = captures.get(1)?.as_str().trim().to_string();
                Some(Intent::WebSearch { query })
            }
            "wikipedia" => {
                let topic = captures.get(1)?.as_str().trim().to_string();
                Some(Intent::Encyclopedia { topic })
            }
            "open_youtube" => Some(Intent::OpenSite(Site::YouTube)),
            "open_google" => Some(Intent::OpenSite(Site::Google)),
            "question" => Some(Intent::Question),
            _ => None,
        }
    }

    fn calculate_confidence(&self, pattern_name: &str, text: &str) -> f32 {
        let base_confidence = match pattern_name {
            "open_youtube" | "open_google" => 0.9,
            "web_search" | "wikipedia" => 0.8,
            "question" => 0.7,
            _ => 0.6,
        };

        // Boost confidence if text is short and direct
        if text.len() < 20 {
            base_confidence + 0.1
        } else {
            base_confidence
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> RequestParser {
        RequestParser::new(ParserConfig::default()).unwrap()
    }

    #[test]
    fn parses_web_search_with_query() {
        let result = parser().parse("search the internet for red cars");
        assert_eq!(
            result.intent,
            Intent::WebSearch {
                query: "red cars".to_string()
            }
        );
        assert!(result.confidence >= 0.7);
    }

    #[test]
    fn parses_wikipedia_lookup() {
        let result = parser().parse("do a wikipedia search for Alan Turing");
        assert_eq!(
            result.intent,
            Intent::Encyclopedia {
                topic: "alan turing".to_string()
            }
        );
    }

    #[test]
    fn parses_site_openers() {
        assert_eq!(
            parser().parse("open youtube").intent,
            Intent::OpenSite(Site::YouTube)
        );
        assert_eq!(
            parser().parse("please open google").intent,
            Intent::OpenSite(Site::Google)
        );
    }

    #[test]
    fn question_mark_makes_a_question() {
        let result = parser().parse("what time is it?");
        assert_eq!(result.intent, Intent::Question);
    }

    #[test]
    fn explicit_search_wins_over_question_mark() {
        let result = parser().parse("search the internet for red cars?");
        assert!(matches!(result.intent, Intent::WebSearch { .. }));
    }

    #[test]
    fn free_form_text_falls_through_to_describe() {
        let result = parser().parse("the big red car");
        assert_eq!(result.intent, Intent::Describe);
        assert!((result.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn custom_patterns_extend_known_intents() {
        let mut config = ParserConfig::default();
        config
            .custom_patterns
            .insert("question".to_string(), r"(?i)tell me".to_string());
        let parser = RequestParser::new(config).unwrap();
        assert_eq!(parser.parse("tell me a story").intent, Intent::Question);
    }
}
