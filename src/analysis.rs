//! Spectral summary of rendered noise.
//!
//! Driving the kernel along a line crosses lattice cells at a fixed rate,
//! and the output spectrum follows that rate: faster sweeps push energy
//! up. [`analyze`] reports the centroid and peak of the magnitude spectrum
//! averaged over half-overlapping windowed frames.

use std::f32::consts::PI;

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::ConfigError;
use crate::kernel::Sample;
use crate::params::AnalysisConfig;

/// Averaged spectrum statistics, DC excluded
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpectrumSummary {
    /// Magnitude-weighted mean frequency (Hz)
    pub centroid_hz: f32,
    /// Centre of the strongest bin (Hz)
    pub peak_hz: f32,
    /// Frames averaged; 0 when the input is shorter than one frame
    pub frames: usize,
}

/// Periodic Hann taper, `sin^2(pi * n / N)`
fn taper(len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| {
            let s = (PI * n as f32 / len as f32).sin();
            s * s
        })
        .collect()
}

/// Summarise the spectrum of `samples`.
///
/// The config is validated first. Input shorter than one frame gives an
/// all-zero summary.
pub fn analyze(
    samples: &[Sample],
    config: &AnalysisConfig,
) -> Result<SpectrumSummary, ConfigError> {
    config.validate()?;

    let frame_size = config.frame_size;
    if samples.len() < frame_size {
        return Ok(SpectrumSummary::default());
    }

    let fft = FftPlanner::new().plan_fft_forward(frame_size);
    let taper = taper(frame_size);
    let mut frame = vec![Complex::new(0.0f32, 0.0); frame_size];

    // Bins 1..=N/2; index 0 of `magnitudes` is bin 1
    let mut magnitudes = vec![0.0f32; frame_size / 2];
    let mut frames = 0;

    for start in (0..=samples.len() - frame_size).step_by(config.hop()) {
        for ((slot, &sample), &t) in frame
            .iter_mut()
            .zip(&samples[start..start + frame_size])
            .zip(&taper)
        {
            *slot = Complex::new(sample * t, 0.0);
        }
        fft.process(&mut frame);

        for (acc, bin) in magnitudes.iter_mut().zip(&frame[1..]) {
            *acc += bin.norm();
        }
        frames += 1;
    }

    let bin_width = config.bin_width_hz();
    let (mut weighted, mut total) = (0.0f64, 0.0f64);
    let mut peak = (0usize, 0.0f32);
    for (i, &magnitude) in magnitudes.iter().enumerate() {
        let hz = (i + 1) as f64 * bin_width as f64;
        weighted += hz * magnitude as f64;
        total += magnitude as f64;
        if magnitude > peak.1 {
            peak = (i + 1, magnitude);
        }
    }

    Ok(SpectrumSummary {
        centroid_hz: if total > 0.0 {
            (weighted / total) as f32
        } else {
            0.0
        },
        peak_hz: peak.0 as f32 * bin_width,
        frames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Perlin3d;
    use crate::params::{CoordinateSweep, RenderConfig};
    use crate::render::OfflineRenderer;

    fn render_sweep(rate_x: f32) -> Vec<Sample> {
        let sweep = CoordinateSweep {
            rate: [rate_x, 0.0, 0.0],
            offset: [0.0, 0.37, 0.61],
        };
        let config = RenderConfig {
            duration_secs: 1.0,
            ..RenderConfig::default()
        };
        OfflineRenderer::new(Perlin3d::default(), &sweep, config)
            .unwrap()
            .render()
            .unwrap()
    }

    #[test]
    fn test_taper_shape() {
        let window = taper(1024);
        assert_eq!(window[0], 0.0);
        assert!((window[512] - 1.0).abs() < 1e-6);
        // periodic: symmetric about the centre, excluding sample 0
        assert!((window[100] - window[924]).abs() < 1e-5);
    }

    #[test]
    fn test_short_input_has_no_frames() {
        let summary = analyze(&[0.5; 100], &AnalysisConfig::default()).unwrap();
        assert_eq!(summary, SpectrumSummary::default());
    }

    #[test]
    fn test_silence() {
        let summary = analyze(&[0.0; 4096], &AnalysisConfig::default()).unwrap();
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.centroid_hz, 0.0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnalysisConfig {
            frame_size: 3000,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            analyze(&[0.1; 4096], &config),
            Err(ConfigError::InvalidFrameSize(3000))
        );

        let config = AnalysisConfig {
            sample_rate_hz: 0,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            analyze(&[0.1; 4096], &config),
            Err(ConfigError::ZeroSampleRate)
        );
    }

    #[test]
    fn test_low_sample_rate_does_not_panic() {
        let config = AnalysisConfig {
            sample_rate_hz: 2000,
            ..AnalysisConfig::default()
        };
        let summary = analyze(&[0.1; 2048], &config).unwrap();
        assert_eq!(summary.frames, 1);
        assert!(summary.centroid_hz <= 1000.0);
    }

    #[test]
    fn test_sine_peak() {
        let config = AnalysisConfig::default();
        let sr = config.sample_rate_hz as f32;
        let tone: Vec<f32> = (0..8192)
            .map(|i| (2.0 * PI * 2000.0 * i as f32 / sr).sin())
            .collect();

        let summary = analyze(&tone, &config).unwrap();

        assert!((summary.peak_hz - 2000.0).abs() <= config.bin_width_hz());
        assert!((summary.centroid_hz - 2000.0).abs() < 200.0);
    }

    #[test]
    fn test_centroid_follows_sweep_rate() {
        let config = AnalysisConfig::default();
        let slow = analyze(&render_sweep(100.0), &config).unwrap();
        let fast = analyze(&render_sweep(800.0), &config).unwrap();

        assert!(slow.centroid_hz > 0.0);
        assert!(
            fast.centroid_hz > slow.centroid_hz * 2.0,
            "slow {} Hz, fast {} Hz",
            slow.centroid_hz,
            fast.centroid_hz
        );
    }
}
