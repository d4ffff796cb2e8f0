//! Installed-voice table
//!
//! Maps a (language, gender) profile onto a synthesizer voice id. Lookup
//! misses are reported to the caller rather than silently falling back, so a
//! profile with no installed voice fails at `say` time with `NoVoice`.

use crate::{Gender, VoiceProfile};

/// (language, gender, voice id) for every installed voice
pub const INSTALLED_VOICES: &[(&str, Gender, &str)] = &[
    ("en-us", Gender::Male, "en-US-David"),
    ("en-us", Gender::Female, "en-US-Zira"),
    ("en-gb", Gender::Female, "en-GB-Hazel"),
    ("es-es", Gender::Female, "es-ES-Helena"),
    ("es-mx", Gender::Female, "es-MX-Sabina"),
];

/// Resolve a profile to a voice id, if one is installed.
pub fn select_voice(profile: &VoiceProfile) -> Option<&'static str> {
    INSTALLED_VOICES
        .iter()
        .find(|(language, gender, _)| *language == profile.language && *gender == profile.gender)
        .map(|(_, _, id)| *id)
}

/// Every voice id the synthesizer knows about.
pub fn available_voices() -> Vec<&'static str> {
    INSTALLED_VOICES.iter().map(|(_, _, id)| *id).collect()
}
