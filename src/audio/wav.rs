//! WAV file writer for rendered melodies.
//!
//! Writes mono 16-bit signed PCM using the hound crate. Samples are scaled
//! to half full scale before quantization.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::config::QuantizePolicy;
use crate::error::{Result, SynthError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per stored sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Scale applied to a normalized sample before rounding.
///
/// Half of `i16::MAX`, leaving 6 dB of headroom.
pub const AMPLITUDE_SCALE: f64 = i16::MAX as f64 / 2.0;

/// Most frames a WAV file can hold: the data chunk size is a `u32` byte
/// count and each frame is two bytes.
pub const MAX_FRAMES: usize = (u32::MAX / 2) as usize;

/// Returns the WAV header spec for the given sample rate.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Quantizes one normalized sample to 16-bit PCM.
///
/// The scaled value is `round(sample * 32767 / 2)`. What happens when it
/// falls outside the `i16` range depends on `policy`.
pub fn quantize(sample: f64, policy: QuantizePolicy) -> Result<i16> {
    let scaled = (sample * AMPLITUDE_SCALE).round();

    match policy {
        QuantizePolicy::Wrap => Ok(scaled as i64 as i16),
        QuantizePolicy::Clamp => Ok(scaled as i16),
        QuantizePolicy::Reject => {
            if (i16::MIN as f64..=i16::MAX as f64).contains(&scaled) {
                Ok(scaled as i16)
            } else {
                Err(SynthError::sample_out_of_range(sample, scaled))
            }
        }
    }
}

/// Writes samples to a WAV file, creating or truncating it.
///
/// # Arguments
///
/// * `samples` - Normalized samples, nominally in `[-1.0, 1.0]`
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz the samples were generated at
/// * `policy` - Handling of samples that overflow 16 bits
///
/// All samples are quantized before the file is opened, so a `Reject`
/// failure leaves the destination untouched. An I/O failure part way
/// through may leave a truncated file behind.
///
/// # Example
///
/// ```ignore
/// use sine_melody::audio::write_wav;
///
/// let samples = vec![0.0, 0.5, -0.5, 0.0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44100, QuantizePolicy::Wrap)?;
/// ```
pub fn write_wav(
    samples: &[f64],
    path: &Path,
    sample_rate: u32,
    policy: QuantizePolicy,
) -> Result<()> {
    let frames = quantize_all(samples, policy)?;

    let writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        SynthError::write_failure(format!("Failed to create WAV file {}", path.display()), e)
    })?;

    write_frames(writer, &frames)?;

    log::debug!("wrote {} frames to {}", frames.len(), path.display());
    Ok(())
}

/// Writes samples as a WAV stream to any seekable sink.
///
/// The header's length fields are patched on finalize, which is why the
/// sink must be seekable.
pub fn write_wav_to<W: Write + Seek>(
    sink: W,
    samples: &[f64],
    sample_rate: u32,
    policy: QuantizePolicy,
) -> Result<()> {
    let frames = quantize_all(samples, policy)?;

    let writer = WavWriter::new(sink, wav_spec(sample_rate))
        .map_err(|e| SynthError::write_failure("Failed to create WAV writer", e))?;

    write_frames(writer, &frames)
}

/// Writes samples to an in-memory WAV buffer.
///
/// Returns the same bytes `write_wav` would put on disk.
pub fn write_wav_to_buffer(
    samples: &[f64],
    sample_rate: u32,
    policy: QuantizePolicy,
) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav_to(&mut cursor, samples, sample_rate, policy)?;
    Ok(cursor.into_inner())
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}

fn quantize_all(samples: &[f64], policy: QuantizePolicy) -> Result<Vec<i16>> {
    samples.iter().map(|&s| quantize(s, policy)).collect()
}

fn write_frames<W: Write + Seek>(mut writer: WavWriter<W>, frames: &[i16]) -> Result<()> {
    for &frame in frames {
        writer
            .write_sample(frame)
            .map_err(|e| SynthError::write_failure("Failed to write sample", e))?;
    }

    writer
        .finalize()
        .map_err(|e| SynthError::write_failure("Failed to finalize WAV file", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn quantize_uses_half_scale() {
        assert_eq!(quantize(0.0, QuantizePolicy::Wrap).unwrap(), 0);
        assert_eq!(quantize(0.5, QuantizePolicy::Wrap).unwrap(), 8192);
        assert_eq!(quantize(1.0, QuantizePolicy::Wrap).unwrap(), 16384);
        assert_eq!(quantize(-1.0, QuantizePolicy::Wrap).unwrap(), -16384);
    }

    #[test]
    fn quantize_out_of_range_policies() {
        // 2.5 * 16383.5 = 40958.75, rounds to 40959
        assert_eq!(quantize(2.5, QuantizePolicy::Wrap).unwrap(), (40959 - 65536) as i16);
        assert_eq!(quantize(2.5, QuantizePolicy::Clamp).unwrap(), i16::MAX);
        assert_eq!(quantize(-2.5, QuantizePolicy::Clamp).unwrap(), i16::MIN);

        let err = quantize(2.5, QuantizePolicy::Reject).unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleOutOfRange);
        assert_eq!(quantize(1.5, QuantizePolicy::Reject).unwrap(), 24575);
    }

    #[test]
    fn quantize_non_finite() {
        // Infinities saturate to i64 first, then keep their low 16 bits
        assert_eq!(quantize(f64::INFINITY, QuantizePolicy::Wrap).unwrap(), -1);
        assert_eq!(quantize(f64::NEG_INFINITY, QuantizePolicy::Wrap).unwrap(), 0);
        assert_eq!(quantize(f64::NAN, QuantizePolicy::Wrap).unwrap(), 0);
        assert_eq!(quantize(f64::INFINITY, QuantizePolicy::Clamp).unwrap(), i16::MAX);

        let err = quantize(f64::NAN, QuantizePolicy::Reject).unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleOutOfRange);
    }

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0.0, 0.5, -0.5, 1.0];
        write_wav(&samples, &path, 44100, QuantizePolicy::Wrap).unwrap();

        assert!(path.exists());

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        let expected: Vec<i16> = samples
            .iter()
            .map(|s| (s * 32767.0 / 2.0).round() as i16)
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn hundred_zero_samples_at_8k() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("silence.wav");

        write_wav(&[0.0; 100], &path, 8000, QuantizePolicy::Wrap).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(reader.duration(), 100);
        assert_eq!(reader.len(), 100);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert!(reader.samples::<i16>().all(|s| s.unwrap() == 0));

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes[bytes.len() - 200..].iter().all(|&b| b == 0));
    }

    #[test]
    fn write_wav_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("again.wav");

        write_wav(&[0.25; 1000], &path, 8000, QuantizePolicy::Wrap).unwrap();
        write_wav(&[0.25; 10], &path, 8000, QuantizePolicy::Wrap).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration(), 10);
    }

    #[test]
    fn write_wav_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.wav");

        let err = write_wav(&[0.0], &path, 8000, QuantizePolicy::Wrap).unwrap_err();
        assert_eq!(err.code, ErrorCode::WriteFailure);
    }

    #[test]
    fn reject_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loud.wav");

        let err = write_wav(&[0.0, 3.0], &path, 8000, QuantizePolicy::Reject).unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleOutOfRange);
        assert!(!path.exists());
    }

    #[test]
    fn write_wav_to_buffer_matches_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("same.wav");
        let samples = vec![0.0, 0.1, -0.9, 0.75];

        write_wav(&samples, &path, 22050, QuantizePolicy::Wrap).unwrap();
        let buffer = write_wav_to_buffer(&samples, 22050, QuantizePolicy::Wrap).unwrap();

        assert_eq!(&buffer[0..4], b"RIFF");
        assert_eq!(&buffer[8..12], b"WAVE");
        assert_eq!(buffer, std::fs::read(&path).unwrap());
    }

    #[test]
    fn empty_buffer_is_valid_wav() {
        let buffer = write_wav_to_buffer(&[], 8000, QuantizePolicy::Wrap).unwrap();
        let reader = hound::WavReader::new(Cursor::new(buffer)).unwrap();
        assert_eq!(reader.duration(), 0);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(88200, 44100), 2.0);
        assert_eq!(samples_to_duration(4000, 8000), 0.5);
    }
}
