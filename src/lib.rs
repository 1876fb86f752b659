//! sine-melody: sine-wave melody synthesis to 16-bit PCM WAV.
//!
//! # Modules
//!
//! - [`types`]: Core data types (NoteEvent, MelodyConfig, RenderedTrack)
//! - [`generation`]: Sine generator and render pipeline
//! - [`audio`]: WAV writing and quantization
//! - [`config`]: Output settings (RenderConfig, QuantizePolicy)
//! - [`error`]: Error types and codes (SynthError, ErrorCode)
//!
//! # Example
//!
//! ```rust,no_run
//! use sine_melody::{render_to_file, MelodyConfig, RenderConfig};
//!
//! let melody = MelodyConfig::happy_birthday();
//! let track = render_to_file(&melody, &RenderConfig::default())?;
//! assert_eq!(track.note_count, 29);
//! # Ok::<(), sine_melody::SynthError>(())
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{QuantizePolicy, RenderConfig};
pub use error::{ErrorCode, Result, SynthError};
pub use generation::{generate, render_samples, render_to_file};
pub use types::{compute_track_id, MelodyConfig, NoteEvent, RenderedTrack};
