use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("audio not recognized")]
    Unintelligible,
    #[error("speech service error: {0}")]
    Service(String),
    #[error("no voice installed for {0}")]
    NoVoice(String),
    #[error("backend error: {0}")]
    Backend(String),
}
