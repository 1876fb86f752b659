//! Render configuration module.
//!
//! Contains the output settings for a render: where the WAV file goes and
//! how out-of-range samples are quantized.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.wav";

/// How samples whose scaled value does not fit in 16 bits are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantizePolicy {
    /// Keep the low 16 bits (two's-complement wrap).
    #[default]
    Wrap,

    /// Saturate to `i16::MIN..=i16::MAX`.
    Clamp,

    /// Fail with `SAMPLE_OUT_OF_RANGE`.
    Reject,
}

impl QuantizePolicy {
    /// Returns the string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantizePolicy::Wrap => "wrap",
            QuantizePolicy::Clamp => "clamp",
            QuantizePolicy::Reject => "reject",
        }
    }
}

impl std::fmt::Display for QuantizePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output settings for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Destination WAV file. Created or truncated.
    pub output_path: PathBuf,

    /// Out-of-range sample handling.
    pub quantize: QuantizePolicy,
}

impl RenderConfig {
    /// Creates a new RenderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.output_path.as_os_str().is_empty() {
            return Some("output path cannot be empty".to_string());
        }

        if self.output_path.is_dir() {
            return Some(format!(
                "output path is a directory: {}",
                self.output_path.display()
            ));
        }

        None
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            quantize: QuantizePolicy::default(),
        }
    }
}
