//! Sine wave generator.
//!
//! Produces normalized amplitude samples for a single note. Rests are
//! frequency 0 and go through the same formula, yielding silence.

use std::f64::consts::PI;

use crate::audio::MAX_FRAMES;
use crate::error::{Result, SynthError};

/// Returns the number of samples a note of `duration_sec` occupies.
///
/// This is `floor(duration_sec * sample_rate)`. Counts above [`MAX_FRAMES`]
/// are rejected since a WAV data chunk cannot hold them.
pub fn sample_count(duration_sec: f64, sample_rate: u32) -> Result<usize> {
    validate(0.0, duration_sec, sample_rate)
}

/// Generates a sine wave.
///
/// # Arguments
///
/// * `frequency` - Frequency in Hz, `0.0` for a rest
/// * `duration_sec` - Note length in seconds, must be positive
/// * `sample_rate` - Sample rate in Hz, must be positive
///
/// # Returns
///
/// `floor(duration_sec * sample_rate)` samples where sample `n` is
/// `sin(2π · frequency · n / sample_rate)`. A duration too short to hold a
/// single sample yields an empty vector.
///
/// # Example
///
/// ```
/// use sine_melody::generation::generate;
///
/// let samples = generate(440.0, 0.01, 44100).unwrap();
/// assert_eq!(samples.len(), 441);
/// ```
pub fn generate(frequency: f64, duration_sec: f64, sample_rate: u32) -> Result<Vec<f64>> {
    let count = validate(frequency, duration_sec, sample_rate)?;
    let rate = sample_rate as f64;

    Ok((0..count)
        .map(|n| (2.0 * PI * frequency * (n as f64 / rate)).sin())
        .collect())
}

/// Checks the parameters and returns the sample count they produce.
fn validate(frequency: f64, duration_sec: f64, sample_rate: u32) -> Result<usize> {
    if sample_rate == 0 {
        return Err(SynthError::invalid_parameter("sample rate must be > 0"));
    }

    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return Err(SynthError::invalid_parameter(format!(
            "duration must be a positive number of seconds, got {}",
            duration_sec
        )));
    }

    if !frequency.is_finite() || frequency < 0.0 {
        return Err(SynthError::invalid_parameter(format!(
            "frequency must be >= 0 Hz, got {}",
            frequency
        )));
    }

    let count = (duration_sec * sample_rate as f64).floor();
    if count > MAX_FRAMES as f64 {
        return Err(SynthError::invalid_parameter(format!(
            "{}s at {} Hz is {} samples, more than a WAV file can hold ({})",
            duration_sec, sample_rate, count, MAX_FRAMES
        )));
    }

    Ok(count as usize)
}
