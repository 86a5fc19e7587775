use crate::error::Result;
use crate::math::{Point3, Rotator, Transform, Vector3};

use super::{check_finite, frame_in_space, point_in_space, CoordinateSpace, Curve, EditableCurve};

/// Number of arc-length samples stored per segment.
const REPARAM_STEPS: usize = 10;

/// Newton refinement steps when inverting arc length.
const NEWTON_ITERATIONS: usize = 3;

/// Gauss-Legendre nodes and weights on `[-1, 1]`.
const GAUSS_NODES: [(f64, f64); 5] = [
    (0.0, 0.568_888_888_888_888_9),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (-0.906_179_845_938_664, 0.236_926_885_056_189_1),
    (0.906_179_845_938_664, 0.236_926_885_056_189_1),
];

/// Arc-length table for one Hermite segment.
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Distance from the spline start to the segment start.
    start: f64,
    /// `steps[k]` is the length from the segment start to `u = k / REPARAM_STEPS`.
    steps: [f64; REPARAM_STEPS + 1],
}

impl Segment {
    fn length(&self) -> f64 {
        self.steps[REPARAM_STEPS]
    }
}

/// A Catmull-Rom spline through its control points.
///
/// Each segment is a cubic Hermite curve whose tangents are
/// `0.5 * (next - prev)`, with the neighbor index clamped at both ends.
/// Distance queries go through a per-segment arc-length table.
#[derive(Debug, Clone, Default)]
pub struct Spline {
    points: Vec<Point3>,
    tangents: Vec<Vector3>,
    segments: Vec<Segment>,
    local: Transform,
    owner: Transform,
}

impl Spline {
    /// Creates a spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite.
    pub fn new(points: &[Point3]) -> Result<Self> {
        let mut spline = Self::default();
        spline.set_control_points(points)?;
        Ok(spline)
    }

    /// Sets the transform of the entity owning this curve.
    pub fn set_owner_transform(&mut self, owner: Transform) {
        self.owner = owner;
    }

    /// Returns the owner transform.
    #[must_use]
    pub fn owner_transform(&self) -> &Transform {
        &self.owner
    }

    /// Recomputes tangents and length tables from segment `first` onward.
    fn rebuild_from(&mut self, first: usize) {
        let n = self.points.len();
        self.tangents.truncate(first);
        for i in first..n {
            let tangent = catmull_rom_tangent(&self.points, i);
            self.tangents.push(tangent);
        }

        self.segments.truncate(first);
        let mut start = self.segments.last().map_or(0.0, |s| s.start + s.length());
        for i in first..n.saturating_sub(1) {
            let steps = self.segment_steps(i);
            self.segments.push(Segment { start, steps });
            start += steps[REPARAM_STEPS];
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn segment_steps(&self, i: usize) -> [f64; REPARAM_STEPS + 1] {
        let mut steps = [0.0; REPARAM_STEPS + 1];
        for k in 1..=REPARAM_STEPS {
            let a = (k - 1) as f64 / REPARAM_STEPS as f64;
            let b = k as f64 / REPARAM_STEPS as f64;
            steps[k] = steps[k - 1] + self.speed_integral(i, a, b);
        }
        steps
    }

    /// Integrates `|dP/du|` over `[a, b]` on segment `i`.
    fn speed_integral(&self, i: usize, a: f64, b: f64) -> f64 {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        GAUSS_NODES
            .iter()
            .map(|&(x, w)| w * self.derivative(i, mid + half * x).norm())
            .sum::<f64>()
            * half
    }

    fn evaluate(&self, i: usize, u: f64) -> Point3 {
        let (p0, p1) = (self.points[i].coords, self.points[i + 1].coords);
        let (m0, m1) = (self.tangents[i], self.tangents[i + 1]);
        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;
        Point3::from(p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11)
    }

    fn derivative(&self, i: usize, u: f64) -> Vector3 {
        let (p0, p1) = (self.points[i].coords, self.points[i + 1].coords);
        let (m0, m1) = (self.tangents[i], self.tangents[i + 1]);
        let u2 = u * u;
        let d00 = 6.0 * u2 - 6.0 * u;
        let d10 = 3.0 * u2 - 4.0 * u + 1.0;
        let d01 = -6.0 * u2 + 6.0 * u;
        let d11 = 3.0 * u2 - 2.0 * u;
        p0 * d00 + m0 * d10 + p1 * d01 + m1 * d11
    }

    /// Inverts the length table of segment `i`: local parameter at `offset`
    /// into the segment, refined with Newton steps on the true arc length.
    #[allow(clippy::cast_precision_loss)]
    fn param_at(&self, i: usize, offset: f64) -> f64 {
        let steps = &self.segments[i].steps;
        let k = steps[1..]
            .partition_point(|&s| s < offset)
            .min(REPARAM_STEPS - 1);
        let (lo, hi) = (steps[k], steps[k + 1]);
        let u_lo = k as f64 / REPARAM_STEPS as f64;
        let u_hi = (k + 1) as f64 / REPARAM_STEPS as f64;
        if hi - lo <= 0.0 {
            return u_lo;
        }

        let mut u = u_lo + (u_hi - u_lo) * ((offset - lo) / (hi - lo)).clamp(0.0, 1.0);
        for _ in 0..NEWTON_ITERATIONS {
            let speed = self.derivative(i, u).norm();
            if speed <= 0.0 {
                break;
            }
            let error = lo + self.speed_integral(i, u_lo, u) - offset;
            u = (u - error / speed).clamp(u_lo, u_hi);
        }
        u
    }

    /// Position and tangent at `distance`, in control-point space.
    fn locate(&self, distance: f64) -> (Point3, Vector3) {
        match self.points.as_slice() {
            [] => (Point3::origin(), Vector3::zeros()),
            [only] => (*only, Vector3::zeros()),
            _ => {
                let d = distance.clamp(0.0, self.length());
                let i = self
                    .segments
                    .partition_point(|s| s.start + s.length() < d)
                    .min(self.segments.len() - 1);
                let u = self.param_at(i, d - self.segments[i].start);
                (self.evaluate(i, u), self.derivative(i, u))
            }
        }
    }
}

/// Catmull-Rom tangent at point `i`, clamping the neighbors at both ends.
fn catmull_rom_tangent(points: &[Point3], i: usize) -> Vector3 {
    let prev = points[i.saturating_sub(1)];
    let next = points[(i + 1).min(points.len() - 1)];
    (next - prev) * 0.5
}

impl Curve for Spline {
    fn length(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.start + s.length())
    }

    fn transform_at_distance(&self, distance: f64, space: CoordinateSpace) -> Transform {
        let (position, tangent) = self.locate(distance);
        frame_in_space(position, &tangent, &self.local, &self.owner, space)
    }

    fn position_at_time(&self, t: f64, space: CoordinateSpace) -> Point3 {
        let (position, _) = self.locate(t.clamp(0.0, 1.0) * self.length());
        point_in_space(position, &self.local, &self.owner, space)
    }
}

impl EditableCurve for Spline {
    fn control_points(&self) -> &[Point3] {
        &self.points
    }

    fn set_control_points(&mut self, points: &[Point3]) -> Result<()> {
        check_finite(points)?;
        self.points = points.to_vec();
        self.rebuild_from(0);
        Ok(())
    }

    fn clear_control_points(&mut self) {
        self.points.clear();
        self.tangents.clear();
        self.segments.clear();
    }

    /// Only the last two segments depend on the appended point, so only
    /// those are rebuilt.
    fn push_control_point(&mut self, point: Point3) -> Result<()> {
        check_finite(std::slice::from_ref(&point))?;
        self.points.push(point);
        self.rebuild_from(self.points.len().saturating_sub(3));
        Ok(())
    }

    fn local_transform(&self) -> &Transform {
        &self.local
    }

    fn set_local_transform(&mut self, position: Point3, rotation: Rotator) {
        self.local = Transform::from_translation_rotation(position, rotation);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn circle_points(radius: f64, count: usize) -> Vec<Point3> {
        (0..=count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let a = std::f64::consts::TAU * i as f64 / count as f64;
                p(radius * a.cos(), radius * a.sin(), 0.0)
            })
            .collect()
    }

    #[test]
    fn straight_spline_has_chord_length() {
        let spline = Spline::new(&[p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]).unwrap();
        assert_relative_eq!(spline.length(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn distance_query_on_straight_spline() {
        let spline = Spline::new(&[p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]).unwrap();
        for d in [0.0, 2.5, 5.0, 7.25, 10.0] {
            let t = spline.transform_at_distance(d, CoordinateSpace::World);
            assert!((t.translation.x - d).abs() < 1e-6, "d={d} x={}", t.translation.x);
            assert!(t.rotation.yaw.abs() < 1e-9);
        }
    }

    #[test]
    fn passes_through_control_points() {
        let pts = [p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0), p(6.0, 0.0, 2.0)];
        let spline = Spline::new(&pts).unwrap();
        assert_relative_eq!(spline.position_at_time(0.0, CoordinateSpace::Local), pts[0]);
        assert_relative_eq!(
            spline.position_at_time(1.0, CoordinateSpace::Local),
            pts[2],
            epsilon = 1e-9
        );
    }

    #[test]
    fn sampled_circle_length_close_to_circumference() {
        let spline = Spline::new(&circle_points(10.0, 36)).unwrap();
        let expected = std::f64::consts::TAU * 10.0;
        assert!((spline.length() - expected).abs() / expected < 5e-3);
    }

    #[test]
    fn tangent_follows_circle() {
        let spline = Spline::new(&circle_points(10.0, 36)).unwrap();
        // A quarter of the way around the tangent points along -X.
        let t = spline.transform_at_distance(spline.length() * 0.25, CoordinateSpace::Local);
        assert!((t.rotation.yaw.abs() - 180.0).abs() < 1.0, "yaw={}", t.rotation.yaw);
    }

    #[test]
    fn push_matches_full_rebuild() {
        let pts = circle_points(4.0, 12);
        let full = Spline::new(&pts).unwrap();
        let mut pushed = Spline::default();
        for q in &pts {
            pushed.push_control_point(*q).unwrap();
        }
        assert_relative_eq!(pushed.length(), full.length(), epsilon = 1e-9);
        let a = pushed.transform_at_distance(7.0, CoordinateSpace::World);
        let b = full.transform_at_distance(7.0, CoordinateSpace::World);
        assert_relative_eq!(a.translation, b.translation, epsilon = 1e-9);
    }

    #[test]
    fn clear_resets_length() {
        let mut spline = Spline::new(&circle_points(1.0, 8)).unwrap();
        spline.clear_control_points();
        assert_relative_eq!(spline.length(), 0.0);
        assert!(spline.control_points().is_empty());
    }

    #[test]
    fn owner_transform_moves_world_queries() {
        let mut spline = Spline::new(&[p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]).unwrap();
        spline.set_owner_transform(Transform::from_translation_rotation(
            p(0.0, 0.0, 100.0),
            Rotator::ZERO,
        ));
        let world = spline.position_at_time(0.0, CoordinateSpace::World);
        let local = spline.position_at_time(0.0, CoordinateSpace::Local);
        assert_relative_eq!(world, p(0.0, 0.0, 100.0));
        assert_relative_eq!(local, p(0.0, 0.0, 0.0));
    }
}
