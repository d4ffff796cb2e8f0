//! Request parser for assistant commands
//!
//! Converts typed or transcribed user requests into structured intents:
//! explicit command phrases ("search the internet for ...", "open youtube")
//! are matched directly, questions are flagged, and anything else falls
//! through to the free-form describe route.

mod parser;
pub use parser::{Intent, ParseResult, RequestParser};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for request parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Confidence threshold for accepting parsed intents
    pub confidence_threshold: f32,
    /// Supported languages
    pub languages: Vec<String>,
    /// Additional patterns, keyed by the intent name they map onto
    pub custom_patterns: HashMap<String, String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.7,
            languages: vec!["en".to_string()],
            custom_patterns: HashMap::new(),
        }
    }
}

/// Initialize the request parser system
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Initializing request parser");
    Ok(())
}

/// Create a new request parser with default configuration
pub fn create_parser() -> Result<RequestParser, Box<dyn std::error::Error>> {
    let config = ParserConfig::default();
    RequestParser::new(config)
}

/// Parse a request and return its structured intent
pub fn parse_request(text: &str) -> Result<ParseResult, Box<dyn std::error::Error>> {
    let parser = create_parser()?;
    Ok(parser.parse(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_demo_requests() {
        let requests = vec![
            "search the internet for rust tutorials",
            "do a wikipedia search for octopus",
            "open youtube",
            "open google",
            "what's the weather like?",
            "the big red car",
        ];

        for request in requests {
            let result = parse_request(request).unwrap();
            assert!(result.confidence > 0.0, "no confidence for '{request}'");
        }
    }
}
