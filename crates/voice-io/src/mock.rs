use crate::voices::select_voice;
use crate::{Error, ListenConfig, Result, SpeakConfig, SpeechInput, SpeechOutput, Transcript};
use time::OffsetDateTime;

pub struct MockSpeechInput {
    _cfg: ListenConfig,
    script: Vec<String>,
    cursor: usize,
}

impl MockSpeechInput {
    /// Mock that recognizes the given utterances in order, then reports
    /// `Unintelligible`.
    pub fn with_script(script: Vec<String>) -> Self {
        Self {
            _cfg: ListenConfig::default(),
            script,
            cursor: 0,
        }
    }
}

impl SpeechInput for MockSpeechInput {
    fn new(config: ListenConfig) -> Self
    where
        Self: Sized,
    {
        // Without a script, fabricate a few utterances
        let script = (1..=3).map(|n| format!("mock utterance {n}")).collect();
        Self {
            _cfg: config,
            script,
            cursor: 0,
        }
    }

    fn listen(&mut self) -> Result<Transcript> {
        let Some(text) = self.script.get(self.cursor) else {
            return Err(Error::Unintelligible);
        };
        self.cursor += 1;
        Ok(Transcript {
            text: text.clone(),
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}

/// Synthesis engine held for the duration of one utterance.
struct EngineSession {
    voice: String,
}

impl EngineSession {
    fn acquire(cfg: &SpeakConfig) -> Result<Self> {
        let voice = match &cfg.voice {
            Some(id) => id.clone(),
            None => select_voice(&cfg.profile)
                .ok_or_else(|| Error::NoVoice(cfg.profile.language.clone()))?
                .to_string(),
        };
        Ok(Self { voice })
    }

    fn speak(&mut self, message: &str) -> Result<()> {
        tracing::debug!(voice = %self.voice, %message, "mock speech");
        Ok(())
    }
}

pub struct MockSpeechOutput {
    cfg: SpeakConfig,
    spoken: Vec<String>,
}

impl MockSpeechOutput {
    /// Everything spoken so far, in order.
    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }
}

impl SpeechOutput for MockSpeechOutput {
    fn new(config: SpeakConfig) -> Self
    where
        Self: Sized,
    {
        Self {
            cfg: config,
            spoken: Vec::new(),
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        // One engine per utterance; released on return
        let mut engine = EngineSession::acquire(&self.cfg)?;
        engine.speak(message)?;
        self.spoken.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, VoiceProfile};

    #[test]
    fn scripted_input_replays_then_fails() {
        let mut input = MockSpeechInput::with_script(vec!["open youtube".into()]);
        assert_eq!(input.listen().unwrap().text, "open youtube");
        assert!(matches!(input.listen(), Err(Error::Unintelligible)));
    }

    #[test]
    fn default_input_fabricates_three_utterances() {
        let mut input = MockSpeechInput::new(ListenConfig::default());
        for _ in 0..3 {
            assert!(input.listen().is_ok());
        }
        assert!(input.listen().is_err());
    }

    #[test]
    fn speaking_records_the_message() {
        let cfg = SpeakConfig::new(VoiceProfile::new("en-us", Gender::Male));
        let mut output = MockSpeechOutput::new(cfg);
        output.say("Sure, I'm on it").unwrap();
        assert_eq!(output.spoken(), ["Sure, I'm on it"]);
    }

    #[test]
    fn missing_voice_is_an_error() {
        let cfg = SpeakConfig::new(VoiceProfile::new("fr-fr", Gender::Male));
        let mut output = MockSpeechOutput::new(cfg);
        assert!(matches!(output.say("bonjour"), Err(Error::NoVoice(_))));
    }

    #[test]
    fn explicit_voice_overrides_the_table() {
        let mut cfg = SpeakConfig::new(VoiceProfile::new("fr-fr", Gender::Male));
        cfg.voice = Some("fr-FR-Custom".into());
        let mut output = MockSpeechOutput::new(cfg);
        assert!(output.say("bonjour").is_ok());
    }
}
