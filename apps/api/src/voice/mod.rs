// Voice Capture: turns a recorded answer into a transcript.
// The browser owns the microphone and uploads the raw clip; acquisition and
// recognition happen here.

pub mod listen;
pub mod recognizer;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use listen::{listen, ListenSettings};
pub use recognizer::{GoogleSpeechClient, SpeechRecognizer};

/// Sample rates accepted for LINEAR16 recognition.
const SAMPLE_RATE_RANGE: std::ops::RangeInclusive<u32> = 8_000..=48_000;

/// Highest upload rate; anything above the recognition range is decimated.
const MAX_UPLOAD_RATE: u32 = 192_000;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid audio clip: {0}")]
    InvalidClip(String),

    #[error("no speech started before the listening timeout")]
    WaitTimeout,

    #[error("clip ended without any speech")]
    NoSpeech,
}

/// Mono 16-bit PCM audio.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl AudioClip {
    /// Decodes raw little-endian 16-bit PCM as uploaded by the page.
    /// Rates above 48 kHz (88.2, 96, 192 kHz capture) are decimated into range.
    pub fn from_pcm16le(bytes: &[u8], sample_rate: u32) -> Result<Self, CaptureError> {
        if sample_rate < *SAMPLE_RATE_RANGE.start() || sample_rate > MAX_UPLOAD_RATE {
            return Err(CaptureError::InvalidClip(format!(
                "sample rate {sample_rate} Hz is outside {}-{MAX_UPLOAD_RATE} Hz",
                SAMPLE_RATE_RANGE.start()
            )));
        }
        if bytes.is_empty() {
            return Err(CaptureError::InvalidClip("no audio recorded".to_string()));
        }
        if bytes.len() % 2 != 0 {
            return Err(CaptureError::InvalidClip(
                "PCM data must be whole 16-bit samples".to_string(),
            ));
        }

        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let clip = Self {
            samples,
            sample_rate,
        };
        Ok(clip.into_recognition_range())
    }

    /// Averages each group of `factor` samples, the smallest factor that brings
    /// the rate within the recognition range.
    fn into_recognition_range(self) -> Self {
        let max = *SAMPLE_RATE_RANGE.end();
        if self.sample_rate <= max {
            return self;
        }
        let factor = self.sample_rate.div_ceil(max);
        let samples = self
            .samples
            .chunks(factor as usize)
            .map(|group| {
                let sum: i32 = group.iter().map(|&s| i32::from(s)).sum();
                (sum / group.len() as i32) as i16
            })
            .collect();
        debug!(
            "Decimated {} Hz clip by {factor} to {} Hz",
            self.sample_rate,
            self.sample_rate / factor
        );
        Self {
            samples,
            sample_rate: self.sample_rate / factor,
        }
    }

    pub fn to_pcm16le(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }
}

/// Terminal result of one voice capture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "transcript", rename_all = "snake_case")]
pub enum VoiceOutcome {
    Success(String),
    /// Audio was captured but held no decodable words.
    Unrecognized,
    /// The recognition service could not be reached or refused the request.
    ServiceUnavailable,
}

impl VoiceOutcome {
    pub fn transcript(&self) -> Option<&str> {
        match self {
            VoiceOutcome::Success(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// User-facing description of the outcome.
    pub fn message(&self) -> String {
        match self {
            VoiceOutcome::Success(text) => format!("You said: {text}"),
            VoiceOutcome::Unrecognized => "Could not understand your speech.".to_string(),
            VoiceOutcome::ServiceUnavailable => {
                "Could not access the recognition service.".to_string()
            }
        }
    }
}

/// Acquires the spoken phrase from `clip` and sends it for recognition.
///
/// Takes ownership of the clip; it is dropped on every path. No retry.
pub async fn capture_answer(
    clip: AudioClip,
    recognizer: &dyn SpeechRecognizer,
    settings: &ListenSettings,
) -> VoiceOutcome {
    let phrase = match listen(clip, settings) {
        Ok(phrase) => phrase,
        Err(e) => {
            info!("No speech acquired: {e}");
            return VoiceOutcome::Unrecognized;
        }
    };

    match recognizer.recognize(&phrase).await {
        Ok(Some(text)) => VoiceOutcome::Success(text),
        Ok(None) => VoiceOutcome::Unrecognized,
        Err(e) => {
            warn!("Speech recognition failed: {e}");
            VoiceOutcome::ServiceUnavailable
        }
    }
}
