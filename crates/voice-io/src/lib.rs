//! voice-io: speech input/output traits with a mock backend

mod error;
pub use error::{Error, Result};

mod types;
pub use types::{Gender, ListenConfig, SpeakConfig, Transcript, VoiceProfile};

mod traits;
pub use traits::{SpeechInput, SpeechOutput};

pub mod voices;
pub use voices::{available_voices, select_voice};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{MockSpeechInput, MockSpeechOutput};

pub mod plugin;
