use std::env;

use crate::provider::ResponseFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini-tts";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings for the speech endpoint.
///
/// The API key is optional here: when unset it is read from
/// `OPENAI_API_KEY` at request time, not when the config is built.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub base_url: String,
    pub model: String,
    pub response_format: ResponseFormat,
    pub api_key: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            response_format: ResponseFormat::default(),
            api_key: None,
        }
    }
}

impl SpeechConfig {
    /// Defaults, with `OPENAI_BASE_URL` and `OPENAI_TTS_MODEL` overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("OPENAI_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = env::var("OPENAI_TTS_MODEL") {
            config.model = model;
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub(crate) fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.base_url.trim_end_matches('/'))
    }
}
