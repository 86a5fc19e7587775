use tracing::debug;

use crate::geometry::{CoordinateSpace, Curve};
use crate::math::Transform;

use super::LengthTable;

/// Which end of the curve slot 0 is placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleDirection {
    /// Slot 0 at the curve start, walking forward.
    #[default]
    FromStart,
    /// Slot 0 at the curve end, walking backward.
    FromEnd,
}

/// One placed instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSample {
    /// Position in the placement sequence.
    pub slot: usize,
    /// Index into the model set (`slot mod N`).
    pub model_index: usize,
    /// Cumulative arc-length offset of this slot from the starting end.
    pub distance: f64,
    /// World transform of the instance.
    pub transform: Transform,
}

/// Walks a curve by cumulative arc length and produces one transform per slot.
///
/// Slot `i` sits at
/// `sum over 0 < j <= i of (gap + footprint of the model in slot j - 1)`,
/// so slot 0 is flush with the starting end.
pub struct SampleTransforms<'a> {
    lengths: &'a LengthTable,
    gap: f64,
    count: usize,
    size: f64,
    direction: SampleDirection,
    yaw_flip: bool,
}

impl<'a> SampleTransforms<'a> {
    /// Creates a new `SampleTransforms` operation sampling forward without a yaw flip.
    #[must_use]
    pub fn new(lengths: &'a LengthTable, gap: f64, count: usize, size: f64) -> Self {
        Self {
            lengths,
            gap,
            count,
            size,
            direction: SampleDirection::FromStart,
            yaw_flip: false,
        }
    }

    /// Sets the end of the curve to start from.
    #[must_use]
    pub fn direction(mut self, direction: SampleDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Adds 180° of yaw to every sample when `flip` is set.
    #[must_use]
    pub fn yaw_flip(mut self, flip: bool) -> Self {
        self.yaw_flip = flip;
        self
    }

    /// Cumulative distances for every slot, without querying a curve.
    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        if self.lengths.is_empty() {
            return Vec::new();
        }
        let mut cumulative = 0.0;
        (0..self.count)
            .map(|slot| {
                let gap = if slot == 0 { 0.0 } else { self.gap };
                cumulative += gap + self.lengths.contribution(slot);
                cumulative
            })
            .collect()
    }

    /// Executes the sampling.
    ///
    /// Returns an empty list when there is no curve, no model or no slot to fill.
    #[must_use]
    pub fn execute<C: Curve + ?Sized>(&self, curve: Option<&C>) -> Vec<PlacementSample> {
        let Some(curve) = curve else {
            return Vec::new();
        };
        let length = curve.length();
        let samples: Vec<_> = self
            .distances()
            .into_iter()
            .enumerate()
            .map(|(slot, distance)| {
                let along = match self.direction {
                    SampleDirection::FromStart => distance,
                    SampleDirection::FromEnd => length - distance,
                };
                let mut transform = curve
                    .transform_at_distance(along, CoordinateSpace::World)
                    .scaled(self.size);
                if self.yaw_flip {
                    transform.rotation = transform.rotation.add_yaw(180.0);
                }
                PlacementSample {
                    slot,
                    model_index: slot % self.lengths.len(),
                    distance,
                    transform,
                }
            })
            .collect();
        debug!(
            count = samples.len(),
            curve_length = length,
            last_distance = samples.last().map_or(0.0, |s| s.distance),
            "sampled placement transforms"
        );
        samples
    }
}
