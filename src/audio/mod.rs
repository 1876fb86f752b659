//! Audio output module.
//!
//! Provides 16-bit PCM WAV writing for rendered melodies.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    quantize, samples_to_duration, write_wav, write_wav_to, write_wav_to_buffer, AMPLITUDE_SCALE,
    BITS_PER_SAMPLE, CHANNELS, MAX_FRAMES,
};
