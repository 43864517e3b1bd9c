mod config;
mod provider;
mod synthesize;
mod voice;

pub use config::{SpeechConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use provider::{OpenAiSpeech, ResponseFormat, SpeechProvider, SpeechRequest};
pub use synthesize::{
    concat_audio_buffers, estimate_duration, Synthesis, VoiceAdapter, ASSUMED_BITRATE_BPS,
};
pub use voice::{resolve_provider_voice, ModelPrecision, ProviderVoice, Voice};

// Re-export common types
pub use bytes::Bytes;
