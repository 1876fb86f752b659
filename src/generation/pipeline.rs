//! Render pipeline for melodies.
//!
//! Generates every note in order, concatenates them into one buffer and
//! hands the buffer to the WAV writer once.

use crate::audio::{write_wav, MAX_FRAMES};
use crate::config::RenderConfig;
use crate::error::{Result, SynthError};
use crate::types::{MelodyConfig, RenderedTrack};

use super::sine::{generate, sample_count};

/// Renders a melody into a single sample buffer.
///
/// # Returns
///
/// The concatenation, in note order, of each note's samples at
/// `melody.sample_rate`.
pub fn render_samples(melody: &MelodyConfig) -> Result<Vec<f64>> {
    render_samples_with_progress(melody, |_, _| {})
}

/// Renders a melody with progress callback.
///
/// `on_progress` receives (notes_rendered, notes_total) after each note.
pub fn render_samples_with_progress<F>(
    melody: &MelodyConfig,
    on_progress: F,
) -> Result<Vec<f64>>
where
    F: Fn(usize, usize),
{
    let total = melody.notes.len();
    let mut buffer = Vec::with_capacity(expected_frame_count(melody)?);

    for (i, note) in melody.notes.iter().enumerate() {
        let samples = generate(note.frequency, note.duration_sec, melody.sample_rate)
            .map_err(|e| SynthError::new(e.code, format!("note {}: {}", i, e.message)))?;

        log::debug!(
            "note {}/{}: {} Hz for {}s -> {} samples",
            i + 1,
            total,
            note.frequency,
            note.duration_sec,
            samples.len()
        );

        buffer.extend(samples);
        on_progress(i + 1, total);
    }

    Ok(buffer)
}

/// Returns the number of frames a melody renders to, without synthesizing it.
///
/// Fails with `InvalidParameter` if any note is invalid or the total exceeds
/// what one WAV file can hold.
pub fn expected_frame_count(melody: &MelodyConfig) -> Result<usize> {
    melody
        .notes
        .iter()
        .enumerate()
        .try_fold(0usize, |total, (i, note)| {
            let count = sample_count(note.duration_sec, melody.sample_rate)
                .map_err(|e| SynthError::new(e.code, format!("note {}: {}", i, e.message)))?;

            total
                .checked_add(count)
                .filter(|&sum| sum <= MAX_FRAMES)
                .ok_or_else(|| {
                    SynthError::invalid_parameter(format!(
                        "melody is longer than a WAV file can hold ({} frames)",
                        MAX_FRAMES
                    ))
                })
        })
}

/// Renders a melody and writes it to `config.output_path`.
///
/// The WAV file is written exactly once, after all notes are generated.
pub fn render_to_file(melody: &MelodyConfig, config: &RenderConfig) -> Result<RenderedTrack> {
    if let Some(reason) = melody.validate() {
        return Err(SynthError::invalid_parameter(reason));
    }
    if let Some(reason) = config.validate() {
        return Err(SynthError::invalid_parameter(reason));
    }

    let samples = render_samples(melody)?;

    log::info!(
        "writing {} frames at {} Hz to {} (quantize: {})",
        samples.len(),
        melody.sample_rate,
        config.output_path.display(),
        config.quantize
    );

    write_wav(&samples, &config.output_path, melody.sample_rate, config.quantize)?;

    Ok(RenderedTrack::new(melody, config.output_path.clone(), samples.len()))
}
