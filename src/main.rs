//! sine-melody: renders the built-in melody to a WAV file and exits.

use std::time::Instant;

use anyhow::Context;

use sine_melody::cli::Cli;
use sine_melody::generation::render_to_file;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let melody = cli.melody();
    let config = cli.render_config();

    eprintln!("=== sine-melody ===");
    eprintln!("Notes: {}", melody.notes.len());
    eprintln!("Sample rate: {} Hz", melody.sample_rate);
    eprintln!("Quantize: {}", config.quantize);
    eprintln!("Output: {}", config.output_path.display());
    eprintln!();

    let start_time = Instant::now();

    let track = render_to_file(&melody, &config)
        .with_context(|| format!("rendering {}", config.output_path.display()))?;

    eprintln!("Render complete!");
    eprintln!("  Time: {:.2}s", start_time.elapsed().as_secs_f32());
    eprintln!("  Frames: {}", track.frame_count);
    eprintln!("  Audio duration: {:.2}s", track.duration_sec);
    eprintln!("  Track ID: {}", track.track_id);
    eprintln!("Saved to: {}", track.path.display());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&track)?);
    }

    Ok(())
}
