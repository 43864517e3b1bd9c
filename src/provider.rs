use std::env;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use rand::RngCore;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{SpeechConfig, API_KEY_ENV};
use crate::voice::ProviderVoice;

/// Audio container requested from the speech endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

/// Body of a speech request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: ProviderVoice,
    pub input: String,
    pub response_format: ResponseFormat,
}

/// A remote speech synthesis service.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize `request.input` and return the encoded audio.
    async fn create_speech(&self, request: &SpeechRequest) -> anyhow::Result<Bytes>;
}

#[instrument]
fn random_request_id() -> String {
    let mut buf = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(&buf[..])
}

/// `/audio/speech` client for OpenAI-compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiSpeech {
    client: Client,
    config: SpeechConfig,
}

impl OpenAiSpeech {
    pub fn new(config: SpeechConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    fn api_key(&self) -> anyhow::Result<String> {
        match &self.config.api_key {
            Some(key) => Ok(key.clone()),
            None => env::var(API_KEY_ENV).map_err(|_| anyhow!("{} is not set", API_KEY_ENV)),
        }
    }
}

#[async_trait]
impl SpeechProvider for OpenAiSpeech {
    #[instrument(skip(self, request), fields(voice = %request.voice, model = %request.model))]
    async fn create_speech(&self, request: &SpeechRequest) -> anyhow::Result<Bytes> {
        let api_key = self.api_key()?;
        let request_id = random_request_id();
        debug!("Generated request ID: {}", request_id);

        let response = self
            .client
            .post(self.config.speech_url())
            .bearer_auth(api_key)
            .header("X-Client-Request-Id", &request_id)
            .json(request)
            .send()
            .await
            .context("speech request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| e.to_string());
            bail!("speech endpoint returned {}: {}", status, body);
        }

        let mut buf = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            buf.extend_from_slice(&chunk.context("failed to read audio body")?);
        }

        debug!(request_id = %request_id, bytes = buf.len(), "Received audio");
        Ok(buf.freeze())
    }
}
