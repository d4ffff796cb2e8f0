//! HTTP-backed search and encyclopedia lookups
//!
//! Blocking clients against public JSON endpoints: DuckDuckGo instant
//! answers for search, the Wikipedia REST summary endpoint for topics.

use crate::{Encyclopedia, Error, Result, WebSearch};
use reqwest::blocking::Client;
use std::time::Duration;

const DUCKDUCKGO_ENDPOINT: &str = "https://api.duckduckgo.com/";
const WIKIPEDIA_SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| Error::Service(e.to_string()))
}

pub struct DuckDuckGoSearch {
    client: Client,
}

impl DuckDuckGoSearch {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

impl WebSearch for DuckDuckGoSearch {
    fn search(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .get(DUCKDUCKGO_ENDPOINT)
            .query(&[("q", query), ("format", "json"), ("no_html", "1")])
            .send()
            .map_err(|e| Error::Service(e.to_string()))?;
        let value: serde_json::Value = response.json().map_err(|e| Error::Service(e.to_string()))?;

        if let Some(abstract_text) = value.get("AbstractText").and_then(|t| t.as_str()) {
            if !abstract_text.is_empty() {
                return Ok(abstract_text.to_string());
            }
        }
        // Fall back to the first related topic
        if let Some(text) = value
            .get("RelatedTopics")
            .and_then(|t| t.as_array())
            .and_then(|topics| topics.first())
            .and_then(|t| t.get("Text"))
            .and_then(|t| t.as_str())
        {
            return Ok(text.to_string());
        }

        Err(Error::NoResult(query.to_string()))
    }
}

pub struct WikipediaRest {
    client: Client,
}

impl WikipediaRest {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

impl Encyclopedia for WikipediaRest {
    fn summary(&self, topic: &str, sentences: usize) -> Result<String> {
        let title = topic.trim().replace(' ', "_");
        let url = format!("{WIKIPEDIA_SUMMARY_ENDPOINT}/{title}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Service(e.to_string()))?;
        if response.status().as_u16() == 404 {
            return Err(Error::NoResult(topic.to_string()));
        }
        let value: serde_json::Value = response.json().map_err(|e| Error::Service(e.to_string()))?;

        let extract = value
            .get("extract")
            .and_then(|t| t.as_str())
            .ok_or_else(|| Error::NoResult(topic.to_string()))?;
        Ok(truncate_sentences(extract, sentences))
    }
}

/// Keep the first `sentences` sentences of a summary.
fn truncate_sentences(text: &str, sentences: usize) -> String {
    let mut kept = String::new();
    let mut seen = 0;
    for ch in text.chars() {
        kept.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            seen += 1;
            if seen >= sentences.max(1) {
                break;
            }
        }
    }
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_leading_sentences() {
        let text = "First. Second. Third.";
        assert_eq!(truncate_sentences(text, 1), "First.");
        assert_eq!(truncate_sentences(text, 2), "First. Second.");
    }

    #[test]
    fn truncation_of_short_text_is_lossless() {
        assert_eq!(truncate_sentences("Only one.", 5), "Only one.");
    }

    #[test]
    fn zero_sentences_still_returns_one() {
        assert_eq!(truncate_sentences("First. Second.", 0), "First.");
    }
}
