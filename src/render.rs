//! Offline host: drives the kernel block by block and writes WAV output.
//!
//! Stands in for the signal runtime that would normally own the noise
//! instance. Each block fills three coordinate buffers, makes one
//! [`Perlin3d::process`] call, and appends the result.

use std::path::Path;

use crate::error::{ConfigError, ProcessError};
use crate::kernel::{Perlin3d, Sample};
use crate::params::{CoordinateSweep, RenderConfig};
use crate::permutation::PERMUTATION_SIZE;

const LATTICE_PERIOD: f64 = PERMUTATION_SIZE as f64;

/// Three coordinate ramp generators, one per axis.
///
/// Phases are held in `f64` and wrapped to the lattice period so long
/// renders keep full `f32` resolution inside the cell.
#[derive(Debug, Clone)]
pub struct CoordinateStreams {
    phase: [f64; 3],
    step: [f64; 3],
}

impl CoordinateStreams {
    pub fn new(sweep: &CoordinateSweep, config: &RenderConfig) -> Self {
        let period = config.sample_period();
        Self {
            phase: sweep
                .offset
                .map(|offset| (offset as f64).rem_euclid(LATTICE_PERIOD)),
            step: sweep.rate.map(|rate| rate as f64 * period),
        }
    }

    /// Current coordinate on each axis
    pub fn position(&self) -> [Sample; 3] {
        self.phase.map(|phase| phase as Sample)
    }

    /// Write the next `xs.len()` coordinates into the three buffers.
    /// All three buffers must have the same length.
    pub fn fill(&mut self, xs: &mut [Sample], ys: &mut [Sample], zs: &mut [Sample]) {
        debug_assert!(xs.len() == ys.len() && ys.len() == zs.len());

        for ((x, y), z) in xs.iter_mut().zip(ys.iter_mut()).zip(zs.iter_mut()) {
            [*x, *y, *z] = self.position();
            for (phase, step) in self.phase.iter_mut().zip(&self.step) {
                *phase = (*phase + step).rem_euclid(LATTICE_PERIOD);
            }
        }
    }
}

/// Block-based renderer owning one noise instance
pub struct OfflineRenderer {
    noise: Perlin3d,
    streams: CoordinateStreams,
    config: RenderConfig,
    xs: Vec<Sample>,
    ys: Vec<Sample>,
    zs: Vec<Sample>,
}

impl OfflineRenderer {
    /// Validates `sweep` and `config` before anything is allocated
    pub fn new(
        noise: Perlin3d,
        sweep: &CoordinateSweep,
        config: RenderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        sweep.validate()?;

        let streams = CoordinateStreams::new(sweep, &config);
        let block_size = config.block_size;
        Ok(Self {
            noise,
            streams,
            config,
            xs: vec![0.0; block_size],
            ys: vec![0.0; block_size],
            zs: vec![0.0; block_size],
        })
    }

    /// Render up to one block into `out`, advancing the coordinate streams
    /// by `out.len()` frames. `out` may be shorter than the block size.
    pub fn render_block(&mut self, out: &mut [Sample]) -> Result<(), ProcessError> {
        let count = out.len().min(self.config.block_size);
        self.streams.fill(
            &mut self.xs[..count],
            &mut self.ys[..count],
            &mut self.zs[..count],
        );
        self.noise.process(&self.xs, &self.ys, &self.zs, out, count)
    }

    /// Render `config.total_frames()` samples
    pub fn render(&mut self) -> Result<Vec<Sample>, ProcessError> {
        let total = self.config.total_frames();
        let block_size = self.config.block_size;
        let mut output = vec![0.0; total];

        log::info!(
            "Rendering {} frames @ {}Hz ({} frames per block)",
            total,
            self.config.sample_rate_hz,
            block_size
        );

        for block in output.chunks_mut(block_size) {
            self.render_block(block)?;
        }

        log::debug!("Render finished at {:?}", self.streams.position());

        Ok(output)
    }
}

/// Write mono 32-bit float WAV
pub fn write_wav(
    path: impl AsRef<Path>,
    samples: &[Sample],
    sample_rate_hz: u32,
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    log::info!(
        "Wrote {} samples to {}",
        samples.len(),
        path.as_ref().display()
    );
    Ok(())
}
