mod reposition_root;
mod synthesize_spiral;
mod winding;

pub use reposition_root::{RepositionRoot, RootPlacement};
pub use synthesize_spiral::{target_length, SynthesizeSpiral, MAX_SPIRAL_POINTS};
pub use winding::WindingSigns;

use crate::error::HelicalError;
use crate::math::TOLERANCE;

/// Shape of a synthesized planar spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParameters {
    /// Angle between consecutive control points, in degrees.
    pub point_interval: f64,
    /// Radial growth per degree of winding.
    pub pitch: f64,
    /// Radius at the first control point.
    pub center_distance: f64,
    /// Which side of the center the spiral starts on.
    pub around: bool,
    /// Winding direction.
    pub clockwise: bool,
}

impl Default for SpiralParameters {
    fn default() -> Self {
        Self {
            point_interval: 20.0,
            pitch: 0.1,
            center_distance: 10.0,
            around: true,
            clockwise: false,
        }
    }
}

impl SpiralParameters {
    /// Returns the signs for this parameter set's flags.
    #[must_use]
    pub fn signs(&self) -> WindingSigns {
        WindingSigns::from_flags(self.around, self.clockwise)
    }

    /// Checks that the spiral grows with every point.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is non-finite, the angular step is zero,
    /// or both pitch and center distance are zero.
    pub fn validate(&self) -> Result<(), HelicalError> {
        if !(self.point_interval.is_finite()
            && self.pitch.is_finite()
            && self.center_distance.is_finite())
        {
            return Err(HelicalError::InvalidSpiral(
                "spiral parameters must be finite".into(),
            ));
        }
        if self.point_interval.abs() < TOLERANCE {
            return Err(HelicalError::InvalidSpiral(
                "point interval must be non-zero".into(),
            ));
        }
        if self.pitch.abs() < TOLERANCE && self.center_distance.abs() < TOLERANCE {
            return Err(HelicalError::InvalidSpiral(
                "pitch and center distance cannot both be zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SpiralParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let params = SpiralParameters {
            point_interval: 0.0,
            ..SpiralParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn collapsed_spiral_rejected() {
        let params = SpiralParameters {
            pitch: 0.0,
            center_distance: 0.0,
            ..SpiralParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn nan_rejected() {
        let params = SpiralParameters {
            pitch: f64::NAN,
            ..SpiralParameters::default()
        };
        assert!(params.validate().is_err());
    }
}
