//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Units (Hz, seconds, lattice units per second)
//! - Documented defaults and meanings
//! - A `validate()` check where invalid values are possible

mod analysis;
mod render;
mod sweep;

// Re-export all types
pub use analysis::AnalysisConfig;
pub use render::{audio_constants, RenderConfig};
pub use sweep::CoordinateSweep;

/// Seed used when none is supplied. Fixed so every default instance
/// produces the same noise field.
pub const DEFAULT_SEED: u32 = 0;
