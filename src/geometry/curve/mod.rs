mod polyline;
mod spline;

pub use polyline::Polyline;
pub use spline::Spline;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Rotator, Transform, Vector3};

/// Coordinate space for curve queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// The space the control points are expressed in.
    Local,
    /// Local space mapped through the curve's local transform and its owner transform.
    World,
}

/// A curve parameterized by arc length.
pub trait Curve {
    /// Total arc length.
    fn length(&self) -> f64;

    /// Transform at `distance` along the curve, rotated to face the tangent.
    ///
    /// `distance` is clamped to `[0, length]`.
    fn transform_at_distance(&self, distance: f64, space: CoordinateSpace) -> Transform;

    /// Position at normalized time `t`, where 0 is the start and 1 the end.
    ///
    /// Time advances at constant speed along the curve, so `t` maps to the
    /// distance `t * length`. `t` is clamped to `[0, 1]`.
    fn position_at_time(&self, t: f64, space: CoordinateSpace) -> Point3;
}

/// A curve whose control points and local frame can be replaced.
pub trait EditableCurve: Curve {
    /// Returns the control points in local space.
    fn control_points(&self) -> &[Point3];

    /// Replaces all control points and rebuilds the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite. The curve is left unchanged.
    fn set_control_points(&mut self, points: &[Point3]) -> Result<()>;

    /// Removes all control points.
    fn clear_control_points(&mut self);

    /// Appends one control point and rebuilds the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite.
    fn push_control_point(&mut self, point: Point3) -> Result<()> {
        let mut points = self.control_points().to_vec();
        points.push(point);
        self.set_control_points(&points)
    }

    /// Returns the transform of the curve relative to its owner.
    fn local_transform(&self) -> &Transform;

    /// Sets the curve's position and rotation relative to its owner.
    fn set_local_transform(&mut self, position: Point3, rotation: Rotator);
}

/// Fails on the first control point with a non-finite coordinate.
pub(crate) fn check_finite(points: &[Point3]) -> Result<()> {
    match points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
        Some(index) => Err(GeometryError::NonFinitePoint { index }.into()),
        None => Ok(()),
    }
}

/// Builds the transform for a point and tangent given in control-point space.
pub(crate) fn frame_in_space(
    position: Point3,
    tangent: &Vector3,
    local: &Transform,
    owner: &Transform,
    space: CoordinateSpace,
) -> Transform {
    let facing = Rotator::from_direction(tangent);
    match space {
        CoordinateSpace::Local => Transform::from_translation_rotation(position, facing),
        CoordinateSpace::World => {
            let rotation = owner.quaternion() * local.quaternion() * facing.to_quaternion();
            Transform::new(
                owner.transform_point(&local.transform_point(&position)),
                Rotator::from_quaternion(&rotation),
                owner.scale.component_mul(&local.scale),
            )
        }
    }
}

/// Maps a control-point-space position into `space`.
pub(crate) fn point_in_space(
    position: Point3,
    local: &Transform,
    owner: &Transform,
    space: CoordinateSpace,
) -> Point3 {
    match space {
        CoordinateSpace::Local => position,
        CoordinateSpace::World => owner.transform_point(&local.transform_point(&position)),
    }
}
