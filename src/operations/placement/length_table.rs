use tracing::warn;

use crate::model::{ModelSet, ModelStore};

/// Arc-length footprint of every model in a [`ModelSet`], in set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthTable {
    footprints: Vec<f64>,
}

impl LengthTable {
    /// Wraps precomputed footprints.
    #[must_use]
    pub fn from_footprints(footprints: Vec<f64>) -> Self {
        Self { footprints }
    }

    /// Returns the footprints in set order.
    #[must_use]
    pub fn footprints(&self) -> &[f64] {
        &self.footprints
    }

    /// Number of footprints, one per model-set entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    /// Returns `true` if there are no footprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    /// Returns the footprint of the model occupying `slot` (round-robin).
    #[must_use]
    pub fn footprint_for_slot(&self, slot: usize) -> f64 {
        if self.footprints.is_empty() {
            return 0.0;
        }
        self.footprints[slot % self.footprints.len()]
    }

    /// Length added before placing `slot`.
    ///
    /// Slot 0 sits flush at the start. Every later slot is pushed forward by
    /// the footprint of the model in the slot *behind* it, so for a set of
    /// `N` models, model `k` is preceded by model `k - 1` and model 0 by
    /// model `N - 1`.
    #[must_use]
    pub fn contribution(&self, slot: usize) -> f64 {
        let n = self.footprints.len();
        if slot == 0 || n == 0 {
            return 0.0;
        }
        let model = slot % n;
        let previous = if model == 0 { n - 1 } else { model - 1 };
        self.footprints[previous]
    }
}

/// Builds the [`LengthTable`] for a model set.
///
/// Each footprint is `extent.x * 2 * size`. Models without bounds, or ids
/// no longer in the store, get a zero footprint so placement collapses
/// instead of failing.
pub struct BuildLengthTable<'a> {
    models: &'a ModelSet,
    size: f64,
}

impl<'a> BuildLengthTable<'a> {
    /// Creates a new `BuildLengthTable` operation.
    #[must_use]
    pub fn new(models: &'a ModelSet, size: f64) -> Self {
        Self { models, size }
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self, store: &ModelStore) -> LengthTable {
        let footprints = self
            .models
            .ids()
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                match store.model(id).map(|m| m.bounding_extent()) {
                    Ok(Some(extent)) => extent.x * 2.0 * self.size,
                    Ok(None) => {
                        warn!(index, "model has no bounding extent, footprint is zero");
                        0.0
                    }
                    Err(err) => {
                        warn!(index, %err, "model missing from store, footprint is zero");
                        0.0
                    }
                }
            })
            .collect();
        LengthTable { footprints }
    }
}
