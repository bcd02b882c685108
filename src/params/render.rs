//! Offline rendering configuration.

use crate::error::ConfigError;

/// Signal block constants (compile-time, match the host's defaults)
pub mod audio_constants {
    /// Audio block size (samples per perform call)
    /// 64 = 1.45ms @ 44.1kHz
    pub const BLOCK_SIZE: usize = 64;

    /// Audio sample rate (Hz)
    pub const SAMPLE_RATE_HZ: u32 = 44100;

    /// Longest offline render (seconds); the whole output is held in memory
    pub const MAX_DURATION_SECS: f32 = 600.0;
}

/// Offline render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Audio sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Frames handed to the kernel per process call
    pub block_size: usize,

    /// Length of the render (seconds)
    pub duration_secs: f32,

    /// Output WAV path
    pub output_path: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: audio_constants::SAMPLE_RATE_HZ,
            block_size: audio_constants::BLOCK_SIZE,
            duration_secs: 2.0,
            output_path: "perlin3d.wav".to_string(),
        }
    }
}

impl RenderConfig {
    /// Total number of frames to render
    pub fn total_frames(&self) -> usize {
        (self.duration_secs as f64 * self.sample_rate_hz as f64).ceil() as usize
    }

    /// Seconds per frame
    pub fn sample_period(&self) -> f64 {
        1.0 / self.sample_rate_hz as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ConfigError::InvalidDuration(self.duration_secs));
        }
        if self.duration_secs > audio_constants::MAX_DURATION_SECS {
            return Err(ConfigError::DurationTooLong {
                duration: self.duration_secs,
                max: audio_constants::MAX_DURATION_SECS,
            });
        }
        Ok(())
    }
}
