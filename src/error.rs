//! Error types for block processing and configuration.

use thiserror::Error;

/// Contract violations detected by [`crate::kernel::Perlin3d::process`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// One of the signal buffers holds fewer than `count` samples
    #[error("{buffer} buffer holds {len} samples, block needs {count}")]
    BufferTooShort {
        buffer: &'static str,
        len: usize,
        count: usize,
    },
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample rate must be > 0")]
    ZeroSampleRate,

    #[error("block size must be > 0")]
    ZeroBlockSize,

    #[error("duration must be finite and > 0, got {0}")]
    InvalidDuration(f32),

    #[error("duration {duration}s exceeds the {max}s render limit")]
    DurationTooLong { duration: f32, max: f32 },

    #[error("analysis frame size must be a power of 2 and >= 2, got {0}")]
    InvalidFrameSize(usize),

    #[error("{axis} sweep {field} must be finite, got {value}")]
    NonFiniteSweep {
        axis: char,
        field: &'static str,
        value: f32,
    },
}
