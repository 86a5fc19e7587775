use crate::error::{HelicalError, Result};
use crate::geometry::{CoordinateSpace, EditableCurve};
use crate::math::{Point3, Rotator};

/// Local frame applied to a spiral by [`RepositionRoot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootPlacement {
    /// Normalized time the spiral was sampled at (`1 - progress`).
    pub time: f64,
    pub position: Point3,
    pub rotation: Rotator,
}

/// Slides a spiral's local frame along the spiral itself.
///
/// The curve is sampled in local space at time `1 - progress`; the curve
/// is then moved so that sample sits on the owner's X axis at its radial
/// distance, and turned to cancel the sample's polar angle. Stepping
/// `progress` from 0 to 1 unrolls the spiral from its outer end inward.
pub struct RepositionRoot {
    progress: f64,
    around: bool,
}

impl RepositionRoot {
    /// Creates a new `RepositionRoot` operation.
    #[must_use]
    pub fn new(progress: f64, around: bool) -> Self {
        Self { progress, around }
    }

    /// Executes the repositioning, updating the curve's local transform.
    ///
    /// # Errors
    ///
    /// Returns an error if `progress` is not within `[0, 1]`.
    pub fn execute<C: EditableCurve + ?Sized>(&self, curve: &mut C) -> Result<RootPlacement> {
        if !(0.0..=1.0).contains(&self.progress) {
            return Err(HelicalError::ProgressOutOfRange(self.progress).into());
        }
        let winding = if self.around { 1.0 } else { -1.0 };
        let time = 1.0 - self.progress;
        let sample = curve.position_at_time(time, CoordinateSpace::Local);

        let radial = sample.x.hypot(sample.y) * winding;
        let turn = if self.around { 180.0 } else { 0.0 };
        let yaw = -sample.y.atan2(sample.x).to_degrees() + turn;

        let placement = RootPlacement {
            time,
            position: Point3::new(radial, 0.0, 0.0),
            rotation: Rotator::new(0.0, yaw, 0.0),
        };
        curve.set_local_transform(placement.position, placement.rotation);
        Ok(placement)
    }
}
