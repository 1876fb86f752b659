//! MelodyConfig type: the tune to render and the rate to render it at.
//!
//! Notes are stored as one ordered sequence of (frequency, duration) pairs,
//! so frequencies and durations cannot drift out of step.

use serde::{Deserialize, Serialize};

use super::note::NoteEvent;
use crate::error::{Result, SynthError};

/// Default output sample rate (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Pause inserted between repeated phrase openings.
const BREATH: f64 = 0.05;

/// Built-in melody: "Happy Birthday" in C major, with short rests between
/// the repeated pickup notes.
const HAPPY_BIRTHDAY: [NoteEvent; 29] = [
    NoteEvent::new(392.0, 0.5),
    NoteEvent::rest(BREATH),
    NoteEvent::new(392.0, 0.5),
    NoteEvent::new(440.0, 1.0),
    NoteEvent::new(392.0, 1.0),
    NoteEvent::new(523.25, 1.0),
    NoteEvent::new(493.88, 2.0),
    NoteEvent::new(392.0, 0.5),
    NoteEvent::rest(BREATH),
    NoteEvent::new(392.0, 0.5),
    NoteEvent::new(440.0, 1.0),
    NoteEvent::new(392.0, 1.0),
    NoteEvent::new(587.33, 1.0),
    NoteEvent::new(523.25, 2.0),
    NoteEvent::new(392.0, 0.5),
    NoteEvent::rest(BREATH),
    NoteEvent::new(392.0, 0.5),
    NoteEvent::new(659.25, 1.0),
    NoteEvent::new(587.33, 1.0),
    NoteEvent::new(523.25, 1.0),
    NoteEvent::new(493.88, 1.0),
    NoteEvent::new(440.0, 2.0),
    NoteEvent::new(698.46, 0.5),
    NoteEvent::rest(BREATH),
    NoteEvent::new(698.46, 0.5),
    NoteEvent::new(659.25, 1.0),
    NoteEvent::new(523.25, 1.0),
    NoteEvent::new(587.33, 1.0),
    NoteEvent::new(523.25, 2.0),
];

/// A melody and the sample rate it is rendered at.
///
/// Built once at startup and passed by reference into the render pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyConfig {
    /// Sample rate in Hz used for every note.
    pub sample_rate: u32,

    /// Notes in playback order.
    pub notes: Vec<NoteEvent>,
}

impl MelodyConfig {
    /// Creates a MelodyConfig from an ordered list of notes.
    pub fn new(sample_rate: u32, notes: Vec<NoteEvent>) -> Self {
        Self { sample_rate, notes }
    }

    /// Creates a MelodyConfig by zipping parallel frequency and duration lists.
    ///
    /// Returns `InvalidParameter` if the lists differ in length.
    pub fn from_parallel(
        sample_rate: u32,
        frequencies: &[f64],
        durations: &[f64],
    ) -> Result<Self> {
        if frequencies.len() != durations.len() {
            return Err(SynthError::length_mismatch(frequencies.len(), durations.len()));
        }

        let notes = frequencies
            .iter()
            .zip(durations)
            .map(|(&frequency, &duration_sec)| NoteEvent::new(frequency, duration_sec))
            .collect();

        Ok(Self::new(sample_rate, notes))
    }

    /// The built-in tune at the default sample rate.
    pub fn happy_birthday() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, HAPPY_BIRTHDAY.to_vec())
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        self.notes
            .iter()
            .enumerate()
            .find_map(|(i, note)| note.validate().map(|msg| format!("note {}: {}", i, msg)))
    }
}

impl Default for MelodyConfig {
    fn default() -> Self {
        Self::happy_birthday()
    }
}
