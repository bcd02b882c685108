//! perlin3d - render 3D Perlin noise as an audio signal
//!
//! Three coordinate ramps drive the noise kernel one block at a time,
//! the way a signal host would, and the result is written to WAV.

use anyhow::{Context, Result};
use clap::Parser;

use perlin3d::analysis::analyze;
use perlin3d::cli::Args;
use perlin3d::params::AnalysisConfig;
use perlin3d::render::{write_wav, OfflineRenderer};
use perlin3d::Perlin3d;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.render_config();
    let sweep = args.sweep();

    log::info!(
        "Seed: {}  Rates: {:?} units/s  Duration: {}s",
        args.seed,
        sweep.rate,
        config.duration_secs
    );

    let output_path = config.output_path.clone();
    let sample_rate_hz = config.sample_rate_hz;

    let mut renderer = OfflineRenderer::new(Perlin3d::new(args.seed), &sweep, config)
        .context("Invalid render settings")?;
    let samples = renderer.render()?;

    write_wav(&output_path, &samples, sample_rate_hz)
        .with_context(|| format!("Failed to write {}", output_path))?;

    if args.analyze {
        let analysis = AnalysisConfig {
            sample_rate_hz,
            ..AnalysisConfig::default()
        };
        let summary = analyze(&samples, &analysis).context("Invalid analysis config")?;
        log::info!(
            "Spectrum: centroid {:.1} Hz  peak {:.1} Hz  ({} frames, sweep {:.1} cells/s)",
            summary.centroid_hz,
            summary.peak_hz,
            summary.frames,
            sweep.cell_rate()
        );
    }

    Ok(())
}
