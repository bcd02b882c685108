//! Command-line argument parsing.

use clap::Parser;

use crate::params::{audio_constants, CoordinateSweep, RenderConfig, DEFAULT_SEED};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "perlin3d")]
#[command(about = "Render seeded 3D Perlin noise to WAV", long_about = None)]
pub struct Args {
    /// Permutation seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Render length (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 2.0)]
    pub duration: f32,

    /// Output sample rate (Hz)
    #[arg(long, value_name = "HZ", default_value_t = audio_constants::SAMPLE_RATE_HZ)]
    pub sample_rate: u32,

    /// Frames per process call
    #[arg(long, value_name = "FRAMES", default_value_t = audio_constants::BLOCK_SIZE)]
    pub block_size: usize,

    /// X travel speed (lattice units per second)
    #[arg(long, value_name = "UNITS", default_value_t = 220.0, allow_negative_numbers = true)]
    pub rate_x: f32,

    /// Y travel speed (lattice units per second)
    #[arg(long, value_name = "UNITS", default_value_t = 0.5, allow_negative_numbers = true)]
    pub rate_y: f32,

    /// Z travel speed (lattice units per second)
    #[arg(long, value_name = "UNITS", default_value_t = 0.25, allow_negative_numbers = true)]
    pub rate_z: f32,

    /// Output WAV path
    #[arg(long, short, default_value = "perlin3d.wav")]
    pub output: String,

    /// Log the spectral centroid and peak of the render
    #[arg(long)]
    pub analyze: bool,
}

impl Args {
    /// Render configuration from command-line arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            sample_rate_hz: self.sample_rate,
            block_size: self.block_size,
            duration_secs: self.duration,
            output_path: self.output.clone(),
        }
    }

    /// Coordinate sweep from command-line arguments
    pub fn sweep(&self) -> CoordinateSweep {
        CoordinateSweep {
            rate: [self.rate_x, self.rate_y, self.rate_z],
            ..CoordinateSweep::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["perlin3d"]);
        assert_eq!(args.seed, 0);
        assert_eq!(args.block_size, 64);
        assert!(!args.analyze);

        let config = args.render_config();
        assert_eq!(config.sample_rate_hz, 44100);
        assert_eq!(config.output_path, "perlin3d.wav");
        assert_eq!(args.sweep().rate, CoordinateSweep::default().rate);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "perlin3d",
            "--seed",
            "42",
            "--rate-x",
            "-30",
            "--duration",
            "0.5",
            "-o",
            "out.wav",
            "--analyze",
        ]);
        assert_eq!(args.seed, 42);
        assert_eq!(args.sweep().rate[0], -30.0);
        assert_eq!(args.render_config().duration_secs, 0.5);
        assert_eq!(args.render_config().output_path, "out.wav");
        assert!(args.analyze);
    }
}
