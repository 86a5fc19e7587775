use super::{UnitQuaternion, Vector3, TOLERANCE};

/// Euler rotation in degrees.
///
/// - `pitch`: rotation about Y, positive tilts the forward (+X) axis toward +Z
/// - `yaw`: rotation about Z, positive turns +X toward +Y
/// - `roll`: rotation about the forward axis
///
/// Composition order is yaw, then pitch, then roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotator {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Rotator {
    /// The identity rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Creates a new rotator from angles in degrees.
    #[must_use]
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Builds the rotator whose forward axis points along `direction`, with zero roll.
    ///
    /// A zero-length direction yields [`Rotator::ZERO`].
    #[must_use]
    pub fn from_direction(direction: &Vector3) -> Self {
        let planar = direction.x.hypot(direction.y);
        if planar < TOLERANCE && direction.z.abs() < TOLERANCE {
            return Self::ZERO;
        }
        Self {
            pitch: direction.z.atan2(planar).to_degrees(),
            yaw: direction.y.atan2(direction.x).to_degrees(),
            roll: 0.0,
        }
    }

    /// Recovers the rotator from a quaternion built by [`Rotator::to_quaternion`].
    #[must_use]
    pub fn from_quaternion(q: &UnitQuaternion) -> Self {
        let (roll, pitch, yaw) = q.euler_angles();
        Self {
            pitch: -pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    /// Converts to a quaternion.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion {
        // nalgebra's positive pitch tilts +X toward -Z, hence the sign flip.
        UnitQuaternion::from_euler_angles(
            self.roll.to_radians(),
            -self.pitch.to_radians(),
            self.yaw.to_radians(),
        )
    }

    /// Returns the forward (+X) axis of this rotation.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.to_quaternion() * Vector3::x()
    }

    /// Returns a copy with `degrees` added to yaw, normalized.
    #[must_use]
    pub fn add_yaw(&self, degrees: f64) -> Self {
        Self {
            yaw: self.yaw + degrees,
            ..*self
        }
        .normalized()
    }

    /// Returns a copy with every angle wrapped into `(-180, 180]`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }
}

/// Wraps an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn normalize_axis(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
