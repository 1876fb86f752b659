//! Core types for sine-melody.
//!
//! - [`NoteEvent`]: One note or rest
//! - [`MelodyConfig`]: The ordered notes plus sample rate
//! - [`RenderedTrack`]: Summary of a written WAV file

mod melody;
mod note;
mod track;

pub use melody::{MelodyConfig, DEFAULT_SAMPLE_RATE};
pub use note::NoteEvent;
pub use track::{compute_track_id, RenderedTrack};
