#[cfg(feature = "http")]
use crate::{DuckDuckGoSearch, WikipediaRest};
#[cfg(feature = "mock")]
use crate::{MockEncyclopedia, MockOpener, MockSearch};
use crate::{Encyclopedia, PageOpener, WebSearch};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchBackendKind {
    Mock,
    DuckDuckGo,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncyclopediaBackendKind {
    Mock,
    Wikipedia,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpenerBackendKind {
    Mock,
    Desktop,
}

pub fn new_search_backend(kind: SearchBackendKind) -> Result<Box<dyn WebSearch + Send>, String> {
    match kind {
        SearchBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockSearch))
            }
            #[cfg(not(feature = "mock"))]
            {
                Err("mock feature not enabled".into())
            }
        }
        SearchBackendKind::DuckDuckGo => {
            #[cfg(feature = "http")]
            {
                DuckDuckGoSearch::new()
                    .map(|s| Box::new(s) as Box<dyn WebSearch + Send>)
                    .map_err(|e| e.to_string())
            }
            #[cfg(not(feature = "http"))]
            {
                Err("http feature not enabled".into())
            }
        }
    }
}

pub fn new_encyclopedia_backend(
    kind: EncyclopediaBackendKind,
) -> Result<Box<dyn Encyclopedia + Send>, String> {
    match kind {
        EncyclopediaBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockEncyclopedia))
            }
            #[cfg(not(feature = "mock"))]
            {
                Err("mock feature not enabled".into())
            }
        }
        EncyclopediaBackendKind::Wikipedia => {
            #[cfg(feature = "http")]
            {
                WikipediaRest::new()
                    .map(|s| Box::new(s) as Box<dyn Encyclopedia + Send>)
                    .map_err(|e| e.to_string())
            }
            #[cfg(not(feature = "http"))]
            {
                Err("http feature not enabled".into())
            }
        }
    }
}

pub fn new_opener_backend(kind: OpenerBackendKind) -> Result<Box<dyn PageOpener + Send>, String> {
    match kind {
        OpenerBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockOpener::new()))
            }
            #[cfg(not(feature = "mock"))]
            {
                Err("mock feature not enabled".into())
            }
        }
        OpenerBackendKind::Desktop => Err("desktop_browser backend not yet integrated".into()),
    }
}
