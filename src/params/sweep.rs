//! Coordinate signals driving the three noise inputs.

use crate::error::ConfigError;

/// Linear coordinate ramps, one per axis: `offset + rate * t`
#[derive(Debug, Clone)]
pub struct CoordinateSweep {
    /// Travel speed along x, y, z (lattice units per second)
    /// x at audio rate gives a pitched noise tone; y and z drift slowly to
    /// morph its timbre
    pub rate: [f32; 3],

    /// Starting coordinate on each axis (lattice units)
    pub offset: [f32; 3],
}

impl Default for CoordinateSweep {
    fn default() -> Self {
        Self {
            rate: [220.0, 0.5, 0.25],
            offset: [0.0; 3],
        }
    }
}

impl CoordinateSweep {
    /// Speed along the sweep direction (lattice units per second).
    /// Sets where the rendered spectrum sits.
    pub fn cell_rate(&self) -> f32 {
        self.rate.iter().map(|r| r * r).sum::<f32>().sqrt()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, (&rate, &offset)) in ['x', 'y', 'z']
            .into_iter()
            .zip(self.rate.iter().zip(&self.offset))
        {
            if !rate.is_finite() {
                return Err(ConfigError::NonFiniteSweep {
                    axis,
                    field: "rate",
                    value: rate,
                });
            }
            if !offset.is_finite() {
                return Err(ConfigError::NonFiniteSweep {
                    axis,
                    field: "offset",
                    value: offset,
                });
            }
        }
        Ok(())
    }
}
