use crate::Result;

/// Web search: returns a short first-result summary for a query.
pub trait WebSearch {
    /// # Errors
    ///
    /// [`crate::Error::NoResult`] when the query produced nothing usable,
    /// [`crate::Error::Service`] when the backend failed.
    fn search(&self, query: &str) -> Result<String>;
}

/// Encyclopedia lookup: a summary of a topic, truncated to `sentences`.
pub trait Encyclopedia {
    /// # Errors
    ///
    /// [`crate::Error::NoResult`] when the topic has no page,
    /// [`crate::Error::Service`] when the backend failed.
    fn summary(&self, topic: &str, sentences: usize) -> Result<String>;
}

/// Browser hand-off: open a URL in a new tab.
pub trait PageOpener {
    /// # Errors
    ///
    /// [`crate::Error::Service`] when the browser could not be driven.
    fn open_new_tab(&mut self, url: &str) -> Result<()>;
}
