#[cfg(feature = "mock")]
use crate::{MockSpeechInput, MockSpeechOutput};
use crate::{ListenConfig, SpeakConfig, SpeechInput, SpeechOutput};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SttBackendKind {
    Mock,
    Cloud,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TtsBackendKind {
    Mock,
    System,
}

pub fn new_speech_input(
    kind: SttBackendKind,
    cfg: ListenConfig,
) -> Result<Box<dyn SpeechInput + Send>, String> {
    match kind {
        SttBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockSpeechInput::new(cfg)))
            }
            #[cfg(not(feature = "mock"))]
            {
                let _ = cfg;
                Err("mock feature not enabled".into())
            }
        }
        SttBackendKind::Cloud => Err("cloud_stt backend not yet integrated".into()),
    }
}

pub fn new_speech_output(
    kind: TtsBackendKind,
    cfg: SpeakConfig,
) -> Result<Box<dyn SpeechOutput + Send>, String> {
    match kind {
        TtsBackendKind::Mock => {
            #[cfg(feature = "mock")]
            {
                Ok(Box::new(MockSpeechOutput::new(cfg)))
            }
            #[cfg(not(feature = "mock"))]
            {
                let _ = cfg;
                Err("mock feature not enabled".into())
            }
        }
        TtsBackendKind::System => Err("system_tts backend not yet integrated".into()),
    }
}
