use crate::{ListenConfig, Result, SpeakConfig, Transcript};

/// Speech capture: blocks until one utterance has been recognized.
pub trait SpeechInput {
    fn new(config: ListenConfig) -> Self
    where
        Self: Sized;

    /// Listen for one utterance and return its transcript.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Unintelligible`] when audio was captured but not
    /// recognized, [`crate::Error::Service`] when the recognition backend
    /// failed.
    fn listen(&mut self) -> Result<Transcript>;
}

/// Speech synthesis. Implementations acquire their engine per `say` call and
/// release it before returning; no engine outlives a single utterance.
pub trait SpeechOutput {
    fn new(config: SpeakConfig) -> Self
    where
        Self: Sized;

    /// Speak one message to completion.
    ///
    /// # Errors
    ///
    /// [`crate::Error::NoVoice`] when the configured profile has no installed
    /// voice, [`crate::Error::Service`] when the engine fails mid-utterance.
    fn say(&mut self, message: &str) -> Result<()>;
}
