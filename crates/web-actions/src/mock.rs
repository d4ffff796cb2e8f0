use crate::{Encyclopedia, Error, PageOpener, Result, WebSearch};

pub struct MockSearch;

impl WebSearch for MockSearch {
    fn search(&self, query: &str) -> Result<String> {
        if query.trim().is_empty() {
            return Err(Error::NoResult(query.to_string()));
        }
        Ok(format!("top result for \"{}\"", query.trim()))
    }
}

pub struct MockEncyclopedia;

impl Encyclopedia for MockEncyclopedia {
    fn summary(&self, topic: &str, sentences: usize) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::NoResult(topic.to_string()));
        }
        let one = format!("{topic} is a topic with a short mock summary.");
        Ok(std::iter::repeat(one.as_str())
            .take(sentences.max(1))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[derive(Default)]
pub struct MockOpener {
    opened: Vec<String>,
}

impl MockOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in order.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl PageOpener for MockOpener {
    fn open_new_tab(&mut self, url: &str) -> Result<()> {
        tracing::debug!(%url, "mock browser tab");
        self.opened.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn search_echoes_the_query() {
        let reply = MockSearch.search("red cars").unwrap();
        assert!(reply.contains("red cars"));
    }

    #[test]
    fn empty_query_has_no_result() {
        assert!(matches!(MockSearch.search("  "), Err(Error::NoResult(_))));
    }

    #[test]
    fn summary_honors_sentence_count() {
        let text = MockEncyclopedia.summary("Rust", 2).unwrap();
        assert_eq!(text.matches('.').count(), 2);
    }

    #[test]
    fn opener_records_tabs() {
        let mut opener = MockOpener::new();
        opener.open_new_tab(Site::YouTube.url()).unwrap();
        assert_eq!(opener.opened(), [Site::YouTube.url()]);
    }
}
