//! RenderedTrack type describing a WAV file written by the pipeline.
//!
//! Tracks are identified by a deterministic track_id computed from the
//! melody that produced them.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::melody::MelodyConfig;
use crate::audio::samples_to_duration;

/// Summary of a rendered WAV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTrack {
    /// SHA256 of the melody (sample rate and every note). 16 hex characters.
    pub track_id: String,

    /// Path the WAV file was written to.
    pub path: PathBuf,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Number of frames in the data section (mono, so equal to samples).
    pub frame_count: usize,

    /// Audio length in seconds derived from `frame_count`.
    pub duration_sec: f64,

    /// Number of note events, rests included.
    pub note_count: usize,
}

impl RenderedTrack {
    /// Creates a RenderedTrack for a melody written to `path`.
    pub fn new(melody: &MelodyConfig, path: PathBuf, frame_count: usize) -> Self {
        Self {
            track_id: compute_track_id(melody),
            path,
            sample_rate: melody.sample_rate,
            frame_count,
            duration_sec: samples_to_duration(frame_count, melody.sample_rate),
            note_count: melody.notes.len(),
        }
    }
}

/// Computes a deterministic track ID for a melody.
///
/// The ID is the first 16 hex characters of the SHA256 hash over the sample
/// rate followed by each note's frequency and duration bit patterns.
pub fn compute_track_id(melody: &MelodyConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(melody.sample_rate.to_le_bytes());
    for note in &melody.notes {
        hasher.update(note.frequency.to_bits().to_le_bytes());
        hasher.update(note.duration_sec.to_bits().to_le_bytes());
    }
    let result = hasher.finalize();
    // First 8 bytes
    hex::encode(&result[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoteEvent;

    #[test]
    fn track_id_deterministic() {
        let id1 = compute_track_id(&MelodyConfig::happy_birthday());
        let id2 = compute_track_id(&MelodyConfig::happy_birthday());
        assert_eq!(id1, id2);
        assert_eq!(id1.len(), 16);
        assert!(id1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn track_id_varies_with_melody() {
        let base = MelodyConfig::happy_birthday();
        let resampled = MelodyConfig {
            sample_rate: 48000,
            ..base.clone()
        };
        let mut retuned = base.clone();
        retuned.notes[0] = NoteEvent::new(391.0, 0.5);

        let id = compute_track_id(&base);
        assert_ne!(id, compute_track_id(&resampled));
        assert_ne!(id, compute_track_id(&retuned));
    }

    #[test]
    fn duration_from_frames() {
        let melody = MelodyConfig::new(8000, vec![NoteEvent::new(440.0, 0.5)]);
        let track = RenderedTrack::new(&melody, PathBuf::from("a.wav"), 4000);
        assert_eq!(track.duration_sec, 0.5);
        assert_eq!(track.note_count, 1);
        assert_eq!(track.sample_rate, 8000);
    }

    #[test]
    fn serializes_to_json() {
        let melody = MelodyConfig::happy_birthday();
        let track = RenderedTrack::new(&melody, PathBuf::from("output.wav"), 1_111_320);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["frame_count"], 1_111_320);
        assert_eq!(json["path"], "output.wav");
    }
}
