//! Speech acquisition from a recorded clip.
//!
//! Calibrates an energy threshold to the ambient noise at the start of the clip,
//! waits (up to a timeout) for the first frame loud enough to be speech, then
//! collects the phrase until a run of silence ends it.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

use super::{AudioClip, CaptureError};

/// Tuning for ambient calibration and phrase detection.
#[derive(Debug, Clone)]
pub struct ListenSettings {
    /// Samples per analysis frame.
    pub frame_len: usize,
    /// Initial energy threshold, before calibration.
    pub energy_threshold: f32,
    /// Leading portion of the clip used for ambient calibration.
    pub ambient_duration: Duration,
    /// Per-second damping of the dynamic threshold.
    pub damping: f32,
    /// Threshold target as a multiple of the ambient energy.
    pub energy_ratio: f32,
    /// Longest wait for speech to start.
    pub timeout: Duration,
    /// Silence that ends a phrase.
    pub pause: Duration,
    /// Shortest run of speech accepted as a phrase.
    pub min_phrase: Duration,
    /// Quiet audio kept on both sides of the phrase.
    pub padding: Duration,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            frame_len: 1024,
            energy_threshold: 300.0,
            ambient_duration: Duration::from_secs(1),
            damping: 0.15,
            energy_ratio: 1.5,
            timeout: Duration::from_secs(5),
            pause: Duration::from_millis(800),
            min_phrase: Duration::from_millis(300),
            padding: Duration::from_millis(500),
        }
    }
}

/// Root-mean-square energy of one frame.
pub fn rms(frame: &[i16]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum: f64 = frame.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / frame.len() as f64).sqrt() as f32
}

fn adjust_threshold(threshold: f32, energy: f32, seconds_per_frame: f32, settings: &ListenSettings) -> f32 {
    let damping = settings.damping.powf(seconds_per_frame);
    let target = energy * settings.energy_ratio;
    threshold * damping + target * (1.0 - damping)
}

fn push_padded<'a>(window: &mut VecDeque<&'a [i16]>, frame: &'a [i16], padding_frames: usize) {
    window.push_back(frame);
    while window.len() > padding_frames + 1 {
        window.pop_front();
    }
}

fn frames_for(duration: Duration, seconds_per_frame: f32) -> usize {
    (duration.as_secs_f32() / seconds_per_frame).ceil() as usize
}

/// Consumes a recorded clip and returns only the spoken phrase.
pub fn listen(clip: AudioClip, settings: &ListenSettings) -> Result<AudioClip, CaptureError> {
    let frame_len = settings.frame_len.max(1);
    let seconds_per_frame = frame_len as f32 / clip.sample_rate as f32;
    let mut frames = clip.samples.chunks(frame_len);
    let mut threshold = settings.energy_threshold;

    let padding_frames = frames_for(settings.padding, seconds_per_frame);
    let pause_frames = frames_for(settings.pause, seconds_per_frame);
    let min_phrase_frames = frames_for(settings.min_phrase, seconds_per_frame);
    let timeout = settings.timeout.as_secs_f32();

    let mut window: VecDeque<&[i16]> = VecDeque::new();

    // A frame well above the threshold during calibration is speech, not room
    // noise: calibration stops there and the phrase starts with that frame.
    let ambient = settings.ambient_duration.as_secs_f32();
    let mut elapsed = 0.0_f32;
    let mut speaking = false;
    loop {
        elapsed += seconds_per_frame;
        if elapsed > ambient {
            break;
        }
        let Some(frame) = frames.next() else { break };
        push_padded(&mut window, frame, padding_frames);
        let energy = rms(frame);
        if energy > threshold * settings.energy_ratio {
            debug!("Speech during ambient calibration (energy {energy:.1})");
            speaking = true;
            break;
        }
        threshold = adjust_threshold(threshold, energy, seconds_per_frame, settings);
    }
    debug!("Ambient calibration done, energy threshold {threshold:.1}");

    let mut waited = 0.0_f32;

    loop {
        // Wait for speech, keeping only the padding behind the current frame.
        while !speaking {
            waited += seconds_per_frame;
            if waited > timeout {
                return Err(CaptureError::WaitTimeout);
            }
            let frame = frames.next().ok_or(CaptureError::NoSpeech)?;
            push_padded(&mut window, frame, padding_frames);
            let energy = rms(frame);
            if energy > threshold {
                speaking = true;
            } else {
                threshold = adjust_threshold(threshold, energy, seconds_per_frame, settings);
            }
        }
        speaking = false;

        let mut pause_count = 0;
        let mut phrase_count = 0;
        let mut exhausted = false;
        loop {
            let Some(frame) = frames.next() else {
                exhausted = true;
                break;
            };
            waited += seconds_per_frame;
            window.push_back(frame);
            phrase_count += 1;
            if rms(frame) > threshold {
                pause_count = 0;
            } else {
                pause_count += 1;
            }
            if pause_count > pause_frames {
                break;
            }
        }

        phrase_count -= pause_count;
        if phrase_count >= min_phrase_frames || exhausted {
            for _ in 0..pause_count.saturating_sub(padding_frames) {
                window.pop_back();
            }
            let samples: Vec<i16> = window.into_iter().flatten().copied().collect();
            debug!(
                "Captured phrase of {:.2}s",
                samples.len() as f32 / clip.sample_rate as f32
            );
            return Ok(AudioClip {
                samples,
                sample_rate: clip.sample_rate,
            });
        }
        // Too short to be a phrase; keep waiting.
    }
}
