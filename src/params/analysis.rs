//! Spectral analysis configuration.

use crate::error::ConfigError;

/// Frame size for the averaged magnitude spectrum
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Sample rate of the analysed signal (Hz)
    pub sample_rate_hz: u32,

    /// Frame length in samples (power of 2). Frames overlap by half.
    /// 2048 @ 44.1kHz gives 21.5 Hz bins, fine enough to resolve sweeps
    /// of a few hundred cells per second
    pub frame_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            frame_size: 2048,
        }
    }
}

impl AnalysisConfig {
    /// Width of one spectrum bin (Hz)
    pub fn bin_width_hz(&self) -> f32 {
        self.sample_rate_hz as f32 / self.frame_size as f32
    }

    /// Distance between consecutive frame starts (samples)
    pub fn hop(&self) -> usize {
        self.frame_size / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.frame_size < 2 || !self.frame_size.is_power_of_two() {
            return Err(ConfigError::InvalidFrameSize(self.frame_size));
        }
        Ok(())
    }
}
