//! web-actions: web search, encyclopedia, and browser hand-off seams

mod error;
pub use error::{Error, Result};

mod sites;
pub use sites::Site;

mod traits;
pub use traits::{Encyclopedia, PageOpener, WebSearch};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{MockEncyclopedia, MockOpener, MockSearch};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{DuckDuckGoSearch, WikipediaRest};

pub mod plugin;
