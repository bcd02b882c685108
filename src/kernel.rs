//! Classic 3D Perlin noise evaluated per audio sample.
//!
//! A [`Perlin3d`] owns one permutation table and nothing else. Evaluation is
//! a pure function of the table and the coordinate, so a single instance can
//! be shared freely across threads.

use std::num::NonZeroUsize;
use std::thread;

use noise::NoiseFn;

use crate::error::ProcessError;
use crate::permutation::{build_permutation, PermutationTable};

/// Signal sample type exchanged with the host
pub type Sample = f32;

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`
#[inline(always)]
pub fn fade(t: Sample) -> Sample {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
pub fn lerp(t: Sample, a: Sample, b: Sample) -> Sample {
    a + t * (b - a)
}

/// Dot product of the offset `(x, y, z)` with one of 16 gradient directions
/// selected by the low four bits of `hash`.
#[inline(always)]
pub fn grad(hash: i32, x: Sample, y: Sample, z: Sample) -> Sample {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Seeded 3D gradient-noise generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perlin3d {
    table: PermutationTable,
}

impl Default for Perlin3d {
    /// Seed 0: every default instance produces the same field.
    fn default() -> Self {
        Self::new(crate::params::DEFAULT_SEED)
    }
}

impl Perlin3d {
    /// Create a generator whose lattice is hashed by the table for `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            table: build_permutation(seed),
        }
    }

    /// Sample the noise field at `(x, y, z)`.
    ///
    /// Output is nominally in [-1, 1]. Integer lattice points always return 0.
    /// Non-finite coordinates yield a non-finite result.
    pub fn evaluate(&self, x: Sample, y: Sample, z: Sample) -> Sample {
        let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());

        // Cell coordinates wrap every 256 units
        let xi = fx as i32 & 255;
        let yi = fy as i32 & 255;
        let zi = fz as i32 & 255;

        // Position inside the cell, in [0, 1)
        let x = x - fx;
        let y = y - fy;
        let z = z - fz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = &self.table;
        let a = p.hash(xi) + yi;
        let aa = p.hash(a) + zi;
        let ab = p.hash(a + 1) + zi;
        let b = p.hash(xi + 1) + yi;
        let ba = p.hash(b) + zi;
        let bb = p.hash(b + 1) + zi;

        let (x1, y1, z1) = (x - 1.0, y - 1.0, z - 1.0);

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p.hash(aa), x, y, z), grad(p.hash(ba), x1, y, z)),
                lerp(u, grad(p.hash(ab), x, y1, z), grad(p.hash(bb), x1, y1, z)),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p.hash(aa + 1), x, y, z1),
                    grad(p.hash(ba + 1), x1, y, z1),
                ),
                lerp(
                    u,
                    grad(p.hash(ab + 1), x, y1, z1),
                    grad(p.hash(bb + 1), x1, y1, z1),
                ),
            ),
        )
    }

    /// Evaluate one signal block: `out[i] = evaluate(xs[i], ys[i], zs[i])`
    /// for `i` in `0..count`, in index order.
    ///
    /// Every buffer must hold at least `count` samples; otherwise nothing is
    /// written and [`ProcessError::BufferTooShort`] names the offending buffer.
    pub fn process(
        &self,
        xs: &[Sample],
        ys: &[Sample],
        zs: &[Sample],
        out: &mut [Sample],
        count: usize,
    ) -> Result<(), ProcessError> {
        check_block(xs, ys, zs, out, count)?;
        self.fill(&xs[..count], &ys[..count], &zs[..count], &mut out[..count]);
        Ok(())
    }

    /// Same contract as [`Perlin3d::process`], with the block split into
    /// contiguous chunks evaluated on scoped threads. At most `workers`
    /// threads run, capped at the machine's available parallelism.
    pub fn process_parallel(
        &self,
        xs: &[Sample],
        ys: &[Sample],
        zs: &[Sample],
        out: &mut [Sample],
        count: usize,
        workers: NonZeroUsize,
    ) -> Result<(), ProcessError> {
        check_block(xs, ys, zs, out, count)?;

        let chunk_len = count.div_ceil(worker_count(workers)).max(1);
        let chunks = out[..count]
            .chunks_mut(chunk_len)
            .zip(xs[..count].chunks(chunk_len))
            .zip(ys[..count].chunks(chunk_len))
            .zip(zs[..count].chunks(chunk_len));

        thread::scope(|scope| {
            for (((out, xs), ys), zs) in chunks {
                scope.spawn(move || self.fill(xs, ys, zs, out));
            }
        });

        Ok(())
    }

    #[inline]
    fn fill(&self, xs: &[Sample], ys: &[Sample], zs: &[Sample], out: &mut [Sample]) {
        for (((out, &x), &y), &z) in out.iter_mut().zip(xs).zip(ys).zip(zs) {
            *out = self.evaluate(x, y, z);
        }
    }
}

/// Requested worker count, capped at the available hardware threads
fn worker_count(requested: NonZeroUsize) -> usize {
    let available = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    requested.get().min(available)
}

fn check_block(
    xs: &[Sample],
    ys: &[Sample],
    zs: &[Sample],
    out: &[Sample],
    count: usize,
) -> Result<(), ProcessError> {
    for (buffer, len) in [
        ("x", xs.len()),
        ("y", ys.len()),
        ("z", zs.len()),
        ("output", out.len()),
    ] {
        if len < count {
            return Err(ProcessError::BufferTooShort { buffer, len, count });
        }
    }
    Ok(())
}

/// Lets the generator plug into `noise` crate combinators.
/// Evaluation happens in `f32`; the result is widened.
impl NoiseFn<f64, 3> for Perlin3d {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.evaluate(point[0] as f32, point[1] as f32, point[2] as f32) as f64
    }
}
