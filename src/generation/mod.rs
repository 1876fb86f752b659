//! Melody synthesis.
//!
//! Provides the sine generator and the pipeline that renders a whole
//! melody into one buffer and writes it out.

mod pipeline;
mod sine;

pub use pipeline::{
    expected_frame_count, render_samples, render_samples_with_progress, render_to_file,
};
pub use sine::{generate, sample_count};
