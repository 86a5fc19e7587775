use super::{Point3, Rotator, UnitQuaternion, Vector3};

/// A translation, rotation and non-uniform scale.
///
/// Points are scaled, then rotated, then translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Point3,
    pub rotation: Rotator,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Point3::new(0.0, 0.0, 0.0),
        rotation: Rotator::ZERO,
        scale: Vector3::new(1.0, 1.0, 1.0),
    };

    /// Creates a new transform.
    #[must_use]
    pub fn new(translation: Point3, rotation: Rotator, scale: Vector3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Creates a unit-scale transform from a translation and rotation.
    #[must_use]
    pub fn from_translation_rotation(translation: Point3, rotation: Rotator) -> Self {
        Self::new(translation, rotation, Vector3::new(1.0, 1.0, 1.0))
    }

    /// Returns the rotation as a quaternion.
    #[must_use]
    pub fn quaternion(&self) -> UnitQuaternion {
        self.rotation.to_quaternion()
    }

    /// Maps a point from this transform's local space into its parent space.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.translation + self.transform_vector(&point.coords)
    }

    /// Maps a direction from local space into parent space (scale and rotation only).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.quaternion() * vector.component_mul(&self.scale)
    }

    /// Returns a copy with the scale multiplied uniformly by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            ..*self
        }
    }
}
