use bytes::Bytes;
use tracing::{debug, error, instrument};

use crate::config::SpeechConfig;
use crate::provider::{OpenAiSpeech, SpeechProvider, SpeechRequest};
use crate::voice::{resolve_provider_voice, ModelPrecision, Voice};

/// Bitrate assumed when turning a payload size into a duration.
pub const ASSUMED_BITRATE_BPS: f64 = 128_000.0;

/// Encoded audio plus its estimated playback length.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub audio: Bytes,
    /// Seconds, estimated from the payload size.
    pub audio_length: f64,
}

/// Estimate playback length in seconds of `byte_len` bytes of audio
/// encoded at [`ASSUMED_BITRATE_BPS`].
///
/// This is not a measurement: variable bitrate or non-speech content
/// will diverge from the real duration.
pub fn estimate_duration(byte_len: usize) -> f64 {
    (byte_len as f64 * 8.0) / ASSUMED_BITRATE_BPS
}

/// Join several synthesized buffers.
///
/// Only the first buffer is returned; the rest are dropped. The speech
/// endpoint returns one complete container per call, so there are no raw
/// samples to splice.
pub fn concat_audio_buffers(buffers: &[Bytes]) -> Bytes {
    buffers.first().cloned().unwrap_or_default()
}

/// Turns voice labels and text into audio through a [`SpeechProvider`].
#[derive(Debug, Clone)]
pub struct VoiceAdapter<P = OpenAiSpeech> {
    provider: P,
    config: SpeechConfig,
}

impl VoiceAdapter<OpenAiSpeech> {
    /// Build an adapter over the OpenAI speech endpoint configured from
    /// the environment. `precision` is ignored; nothing is loaded and the
    /// API key is only looked up when a request is made.
    pub fn init(_precision: ModelPrecision) -> anyhow::Result<Self> {
        let config = SpeechConfig::from_env();
        let provider = OpenAiSpeech::new(config.clone())?;
        Ok(Self::new(provider, config))
    }
}

impl<P: SpeechProvider> VoiceAdapter<P> {
    pub fn new(provider: P, config: SpeechConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Synthesize `text` with `voice`.
    ///
    /// Unknown voice labels are rendered with the default provider voice.
    /// Provider errors are logged and returned as-is.
    #[instrument(skip(self, text))]
    pub async fn synthesize(&self, text: &str, voice: &str) -> anyhow::Result<Synthesis> {
        let provider_voice = resolve_provider_voice(voice);
        let request = SpeechRequest {
            model: self.config.model.clone(),
            voice: provider_voice,
            input: text.to_owned(),
            response_format: self.config.response_format,
        };

        match self.provider.create_speech(&request).await {
            Ok(audio) => {
                let estimated_duration = estimate_duration(audio.len());
                debug!(
                    text,
                    voice,
                    provider_voice = %provider_voice,
                    estimated_duration,
                    "Audio generated"
                );
                Ok(Synthesis {
                    audio,
                    audio_length: estimated_duration,
                })
            }
            Err(e) => {
                error!(error = %format!("{:#}", e), text, voice, "Failed to generate audio");
                Err(e)
            }
        }
    }

    pub fn list_available_voices(&self) -> &'static [Voice] {
        &Voice::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_thousand_bytes_is_one_second() {
        assert_eq!(estimate_duration(16_000), 1.0);
        assert_eq!(estimate_duration(0), 0.0);
        assert_eq!(estimate_duration(48_000), 3.0);
    }

    #[test]
    fn concat_keeps_only_first_buffer() {
        let a = Bytes::from_static(b"first");
        let b = Bytes::from_static(b"second");
        let c = Bytes::from_static(b"third");
        assert_eq!(concat_audio_buffers(&[a.clone(), b, c]), a);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        assert!(concat_audio_buffers(&[]).is_empty());
    }
}
