use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Voice gender requested for synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Language plus gender; the key into the installed-voice table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// BCP-47-ish language tag, e.g. "en-us" or "en-gb"
    pub language: String,
    pub gender: Gender,
}

impl VoiceProfile {
    pub fn new(language: impl Into<String>, gender: Gender) -> Self {
        Self {
            language: language.into(),
            gender,
        }
    }

    /// Whether this profile is one the assistant can converse in
    pub fn is_english(&self) -> bool {
        self.language == "en-us" || self.language == "en-gb"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    pub language: Option<String>,
    /// Seconds of silence that end an utterance
    #[serde(default = "default_pause_threshold")]
    pub pause_threshold: f32,
}

fn default_pause_threshold() -> f32 {
    0.8
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            language: None,
            pause_threshold: default_pause_threshold(),
        }
    }
}

/// One recognized utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub ts: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakConfig {
    pub profile: VoiceProfile,
    /// Explicit voice id, overriding the profile lookup
    pub voice: Option<String>,
}

impl SpeakConfig {
    pub fn new(profile: VoiceProfile) -> Self {
        Self {
            profile,
            voice: None,
        }
    }
}
