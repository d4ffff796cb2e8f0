use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no result for: {0}")]
    NoResult(String),
    #[error("service error: {0}")]
    Service(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
