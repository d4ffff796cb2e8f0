use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown grammatical role: {0}")]
    UnknownRole(String),
}
