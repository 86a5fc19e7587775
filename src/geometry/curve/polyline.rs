use crate::error::Result;
use crate::math::{Point3, Rotator, Transform, Vector3, TOLERANCE};

use super::{check_finite, frame_in_space, point_in_space, CoordinateSpace, Curve, EditableCurve};

/// A piecewise-linear curve through its control points.
///
/// Arc length is exact, which makes it the reference curve for straight
/// fence runs.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Point3>,
    /// `cumulative[i]` is the arc length from the first point to point `i`.
    cumulative: Vec<f64>,
    local: Transform,
    owner: Transform,
}

impl Polyline {
    /// Creates a polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite.
    pub fn new(points: &[Point3]) -> Result<Self> {
        let mut polyline = Self::default();
        polyline.set_control_points(points)?;
        Ok(polyline)
    }

    /// Sets the transform of the entity owning this curve.
    pub fn set_owner_transform(&mut self, owner: Transform) {
        self.owner = owner;
    }

    /// Position and direction at `distance`, in control-point space.
    fn locate(&self, distance: f64) -> (Point3, Vector3) {
        match self.points.as_slice() {
            [] => (Point3::origin(), Vector3::zeros()),
            [only] => (*only, Vector3::zeros()),
            points => {
                let d = distance.clamp(0.0, self.length());
                // First segment whose end reaches `d`, skipping zero-length ones.
                let seg = self.cumulative[1..]
                    .iter()
                    .enumerate()
                    .position(|(i, &end)| end >= d && end - self.cumulative[i] > TOLERANCE)
                    .unwrap_or(points.len() - 2);
                let (a, b) = (points[seg], points[seg + 1]);
                let span = self.cumulative[seg + 1] - self.cumulative[seg];
                if span < TOLERANCE {
                    return (a, Vector3::zeros());
                }
                let t = ((d - self.cumulative[seg]) / span).clamp(0.0, 1.0);
                (a + (b - a) * t, (b - a) / span)
            }
        }
    }
}

impl Curve for Polyline {
    fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn transform_at_distance(&self, distance: f64, space: CoordinateSpace) -> Transform {
        let (position, direction) = self.locate(distance);
        frame_in_space(position, &direction, &self.local, &self.owner, space)
    }

    fn position_at_time(&self, t: f64, space: CoordinateSpace) -> Point3 {
        let (position, _) = self.locate(t.clamp(0.0, 1.0) * self.length());
        point_in_space(position, &self.local, &self.owner, space)
    }
}

impl EditableCurve for Polyline {
    fn control_points(&self) -> &[Point3] {
        &self.points
    }

    fn set_control_points(&mut self, points: &[Point3]) -> Result<()> {
        check_finite(points)?;
        self.points = points.to_vec();
        self.cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += (p - points[i - 1]).norm();
            }
            self.cumulative.push(total);
        }
        Ok(())
    }

    fn clear_control_points(&mut self) {
        self.points.clear();
        self.cumulative.clear();
    }

    fn push_control_point(&mut self, point: Point3) -> Result<()> {
        check_finite(std::slice::from_ref(&point))?;
        let total = match self.points.last() {
            Some(last) => self.length() + (point - last).norm(),
            None => 0.0,
        };
        self.points.push(point);
        self.cumulative.push(total);
        Ok(())
    }

    fn local_transform(&self) -> &Transform {
        &self.local
    }

    fn set_local_transform(&mut self, position: Point3, rotation: Rotator) {
        self.local = Transform::from_translation_rotation(position, rotation);
    }
}
