//! NoteEvent type: one pitched note or rest of the melody.

use serde::{Deserialize, Serialize};

/// A single (frequency, duration) event.
///
/// A frequency of `0.0` is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Pitch in Hz. Constraint: >= 0.
    pub frequency: f64,

    /// Length in seconds. Constraint: > 0.
    pub duration_sec: f64,
}

impl NoteEvent {
    /// Creates a pitched note.
    pub const fn new(frequency: f64, duration_sec: f64) -> Self {
        Self {
            frequency,
            duration_sec,
        }
    }

    /// Creates a rest of the given length.
    pub const fn rest(duration_sec: f64) -> Self {
        Self::new(0.0, duration_sec)
    }

    /// Returns true if this event is silent.
    pub fn is_rest(&self) -> bool {
        self.frequency == 0.0
    }

    /// Validates the event.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Some(format!("frequency must be >= 0 Hz, got {}", self.frequency));
        }

        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Some(format!(
                "duration must be > 0 seconds, got {}",
                self.duration_sec
            ));
        }

        None
    }
}
