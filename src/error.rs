//! Error types for sine-melody.
//!
//! Every failure in the render pipeline is a [`SynthError`] carrying an
//! [`ErrorCode`]. All of them are fatal: nothing is retried.

use std::fmt;

/// Error codes reported by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A generator or melody parameter is outside its valid domain.
    /// Trigger: duration <= 0, sample rate 0, negative frequency,
    /// mismatched frequency/duration sequences.
    InvalidParameter,

    /// The WAV destination could not be created, written or finalized.
    /// Trigger: missing directory, permissions, disk full.
    WriteFailure,

    /// A scaled sample does not fit in 16 bits.
    /// Only raised under `QuantizePolicy::Reject`.
    SampleOutOfRange,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::WriteFailure => "WRITE_FAILURE",
            ErrorCode::SampleOutOfRange => "SAMPLE_OUT_OF_RANGE",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "Synthesis parameter outside its valid range",
            ErrorCode::WriteFailure => "Failed to write the WAV file",
            ErrorCode::SampleOutOfRange => "Sample amplitude does not fit in 16-bit PCM",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => {
                "Use a positive duration and sample rate, a non-negative frequency, \
                 and equally long frequency and duration lists"
            }
            ErrorCode::WriteFailure => {
                "Check that the output directory exists and is writable, \
                 and that there is free disk space"
            }
            ErrorCode::SampleOutOfRange => {
                "Keep sample amplitudes within [-1.0, 1.0], \
                 or render with --quantize wrap or --quantize clamp"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for synthesis and file output.
#[derive(Debug)]
pub struct SynthError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SynthError {
    /// Creates a new SynthError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SynthError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_PARAMETER error.
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParameter,
            format!("Invalid parameter: {}", reason.into()),
        )
    }

    /// Creates an INVALID_PARAMETER error for parallel sequences of unequal length.
    pub fn length_mismatch(frequencies: usize, durations: usize) -> Self {
        Self::invalid_parameter(format!(
            "{} frequencies but {} durations",
            frequencies, durations
        ))
    }

    /// Creates a WRITE_FAILURE error wrapping the underlying WAV/IO error.
    pub fn write_failure(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(ErrorCode::WriteFailure, context, source)
    }

    /// Creates a SAMPLE_OUT_OF_RANGE error.
    pub fn sample_out_of_range(sample: f64, scaled: f64) -> Self {
        Self::new(
            ErrorCode::SampleOutOfRange,
            format!(
                "Sample {} scales to {} which is outside [{}, {}]",
                sample,
                scaled,
                i16::MIN,
                i16::MAX
            ),
        )
    }
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SynthError.
pub type Result<T> = std::result::Result<T, SynthError>;
