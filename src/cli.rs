//! CLI argument parser.
//!
//! The melody, its 44100 Hz sample rate and the `output.wav` destination are
//! fixed. Flags only change how the output is quantized and reported.

use clap::{Parser, ValueEnum};

use crate::config::{QuantizePolicy, RenderConfig};
use crate::types::MelodyConfig;

/// Out-of-range sample handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum QuantizeArg {
    /// Keep the low 16 bits of the scaled value
    #[default]
    Wrap,
    /// Saturate to the 16-bit range
    Clamp,
    /// Fail the render
    Reject,
}

impl From<QuantizeArg> for QuantizePolicy {
    fn from(arg: QuantizeArg) -> Self {
        match arg {
            QuantizeArg::Wrap => QuantizePolicy::Wrap,
            QuantizeArg::Clamp => QuantizePolicy::Clamp,
            QuantizeArg::Reject => QuantizePolicy::Reject,
        }
    }
}

/// sine-melody: render a sine-wave melody to a WAV file
#[derive(Parser, Debug)]
#[command(name = "sine-melody")]
#[command(about = "Renders the built-in melody to output.wav (16-bit mono, 44100 Hz)")]
#[command(version)]
pub struct Cli {
    /// How samples that overflow 16 bits are quantized
    #[arg(short, long, value_enum, default_value_t = QuantizeArg::Wrap)]
    pub quantize: QuantizeArg,

    /// Print a JSON summary of the written track to stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the melody to render.
    pub fn melody(&self) -> MelodyConfig {
        MelodyConfig::happy_birthday()
    }

    /// Returns the output settings.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            quantize: self.quantize.into(),
            ..RenderConfig::new()
        }
    }
}
