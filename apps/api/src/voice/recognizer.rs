//! Hosted speech-to-text: the `SpeechRecognizer` port and its Google Cloud implementation.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::AudioClip;

const SPEECH_API_BASE: &str = "https://speech.googleapis.com";
const LANGUAGE_CODE: &str = "en-US";

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Port for speech recognition.
///
/// `Ok(None)` means the service was reached but decoded no words.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, clip: &AudioClip) -> Result<Option<String>, RecognitionError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'a str,
    sample_rate_hertz: u32,
    language_code: &'a str,
}

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

impl RecognizeResponse {
    /// Joins the top alternative of each consecutive result.
    fn transcript(&self) -> Option<String> {
        let pieces: Vec<&str> = self
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if pieces.is_empty() {
            None
        } else {
            Some(pieces.join(" "))
        }
    }
}

/// Google Cloud Speech-to-Text `speech:recognize` client.
#[derive(Clone)]
pub struct GoogleSpeechClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleSpeechClient {
    pub fn new(api_key: String) -> Result<Self, RecognitionError> {
        Self::with_base_url(api_key, SPEECH_API_BASE)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self, RecognitionError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(&self, clip: &AudioClip) -> Result<Option<String>, RecognitionError> {
        let request_body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: clip.sample_rate,
                language_code: LANGUAGE_CODE,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(clip.to_pcm16le()),
            },
        };

        let response = self
            .client
            .post(format!("{}/v1/speech:recognize", self.base_url))
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(RecognitionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: RecognizeResponse = serde_json::from_slice(&body)?;
        debug!("Speech recognition returned {} result(s)", parsed.results.len());
        Ok(parsed.transcript())
    }
}
