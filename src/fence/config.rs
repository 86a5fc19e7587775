use crate::error::{HelicalError, PlacementError, Result};
use crate::operations::helical::SpiralParameters;

/// Parameters of a fence laid along an existing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFenceConfig {
    /// Number of instances to place.
    pub display_count: usize,
    /// Uniform scale applied to every model.
    pub size: f64,
    /// Arc-length gap between consecutive instances.
    pub gap: f64,
}

impl Default for LinearFenceConfig {
    fn default() -> Self {
        Self {
            display_count: 1,
            size: 1.0,
            gap: 2.0,
        }
    }
}

impl LinearFenceConfig {
    /// # Errors
    ///
    /// Returns an error if `size` or `gap` is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        check_scalar("size", self.size)?;
        check_scalar("gap", self.gap)?;
        Ok(())
    }
}

/// Parameters of a fence wound into a synthesized spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelicalFenceConfig {
    pub display_count: usize,
    pub size: f64,
    pub gap: f64,
    pub spiral: SpiralParameters,
    /// Unrolling progress in `[0, 1]`.
    pub progress: f64,
}

impl Default for HelicalFenceConfig {
    fn default() -> Self {
        Self {
            display_count: 10,
            size: 1.0,
            gap: 2.0,
            spiral: SpiralParameters::default(),
            progress: 0.0,
        }
    }
}

impl HelicalFenceConfig {
    /// # Errors
    ///
    /// Returns an error if a scalar is negative or non-finite, the spiral
    /// cannot grow, or `progress` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_scalar("size", self.size)?;
        check_scalar("gap", self.gap)?;
        self.spiral.validate()?;
        check_progress(self.progress)?;
        Ok(())
    }
}

pub(crate) fn check_progress(progress: f64) -> std::result::Result<(), HelicalError> {
    if (0.0..=1.0).contains(&progress) {
        Ok(())
    } else {
        Err(HelicalError::ProgressOutOfRange(progress))
    }
}

fn check_scalar(parameter: &'static str, value: f64) -> std::result::Result<(), PlacementError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlacementError::InvalidScalar { parameter, value })
    }
}
