//! perlin3d - seeded 3D Perlin noise evaluated at audio rate

pub mod analysis;
pub mod cli;
pub mod error;
pub mod kernel;
pub mod params;
pub mod permutation;
pub mod render;

pub use error::{ConfigError, ProcessError};
pub use kernel::{Perlin3d, Sample};
pub use permutation::{build_permutation, lcg_next, PermutationTable};
