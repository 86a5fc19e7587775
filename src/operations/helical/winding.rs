/// Signs derived from the `around` and `clockwise` flags of a spiral.
///
/// | around | clockwise | point interval | center distance |
/// |--------|-----------|----------------|-----------------|
/// | true   | true      | -              | -               |
/// | true   | false     | +              | +               |
/// | false  | true      | +              | -               |
/// | false  | false     | -              | +               |
///
/// `winding` is `+1` when `around` is set and `-1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindingSigns {
    pub point_interval: f64,
    pub center_distance: f64,
    pub winding: f64,
}

impl WindingSigns {
    /// Looks up the signs for a flag combination.
    #[must_use]
    pub fn from_flags(around: bool, clockwise: bool) -> Self {
        let point_interval = if around == clockwise { -1.0 } else { 1.0 };
        let center_distance = if clockwise { -1.0 } else { 1.0 };
        let winding = if around { 1.0 } else { -1.0 };
        Self {
            point_interval,
            center_distance,
            winding,
        }
    }
}
