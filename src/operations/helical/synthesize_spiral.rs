use tracing::{debug, trace};

use crate::error::{HelicalError, Result};
use crate::geometry::EditableCurve;
use crate::math::Point3;
use crate::operations::placement::LengthTable;

use super::SpiralParameters;

/// Upper bound on control points a single synthesis may append.
pub const MAX_SPIRAL_POINTS: usize = 100_000;

/// Length a spiral must reach to hold `count` slots.
///
/// Sums the per-slot footprint contributions only; the gap between
/// instances is not included.
#[must_use]
pub fn target_length(lengths: &LengthTable, count: usize) -> f64 {
    (0..count).map(|slot| lengths.contribution(slot)).sum()
}

/// Grows a planar spiral one control point at a time until the curve is at
/// least `target` long.
///
/// Point `k` sits at angle `a = k * point_interval` (signed by the winding
/// flags, in degrees) and radius `a * pitch + center_distance`.
pub struct SynthesizeSpiral {
    params: SpiralParameters,
    target: f64,
}

impl SynthesizeSpiral {
    /// Creates a new `SynthesizeSpiral` operation.
    #[must_use]
    pub fn new(params: SpiralParameters, target: f64) -> Self {
        Self { params, target }
    }

    /// Control point for step `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point_at(&self, index: usize) -> Point3 {
        let signs = self.params.signs();
        let angle = index as f64 * self.params.point_interval * signs.point_interval * signs.winding;
        let radius = angle * self.params.pitch + self.params.center_distance * signs.center_distance;
        let radians = angle.to_radians();
        Point3::new(radius * radians.cos(), radius * radians.sin(), 0.0)
    }

    /// Executes the synthesis, replacing the curve's control points.
    ///
    /// A non-positive target leaves the curve empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the curve has not
    /// reached the target after [`MAX_SPIRAL_POINTS`] points.
    pub fn execute<C: EditableCurve + ?Sized>(&self, curve: &mut C) -> Result<Vec<Point3>> {
        self.params.validate()?;
        if !self.target.is_finite() {
            return Err(HelicalError::InvalidSpiral(format!(
                "target length must be finite, got {}",
                self.target
            ))
            .into());
        }

        curve.clear_control_points();
        let mut points = Vec::new();
        if self.target <= 0.0 {
            return Ok(points);
        }

        while curve.length() < self.target {
            if points.len() >= MAX_SPIRAL_POINTS {
                return Err(HelicalError::SpiralDidNotConverge {
                    points: points.len(),
                    length: curve.length(),
                    target: self.target,
                }
                .into());
            }
            let point = self.point_at(points.len());
            trace!(index = points.len(), x = point.x, y = point.y, "spiral point");
            curve.push_control_point(point)?;
            points.push(point);
        }

        debug!(
            points = points.len(),
            length = curve.length(),
            target = self.target,
            "synthesized spiral"
        );
        Ok(points)
    }
}
