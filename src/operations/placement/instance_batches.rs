use crate::math::Transform;
use crate::model::{ModelId, ModelSet};

use super::PlacementSample;

/// All instances of one model, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    pub model: ModelId,
    pub transforms: Vec<Transform>,
}

/// Placement samples grouped for instanced drawing, one batch per entry of
/// the model set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceBatches {
    batches: Vec<InstanceBatch>,
}

impl InstanceBatches {
    /// Groups `samples` by their model index.
    ///
    /// A model listed twice in the set gets two batches, matching the slots
    /// it occupies.
    #[must_use]
    pub fn from_samples(models: &ModelSet, samples: &[PlacementSample]) -> Self {
        let mut batches: Vec<InstanceBatch> = models
            .ids()
            .iter()
            .map(|&model| InstanceBatch {
                model,
                transforms: Vec::new(),
            })
            .collect();
        if batches.is_empty() {
            return Self { batches };
        }
        let n = batches.len();
        for sample in samples {
            batches[sample.model_index % n].transforms.push(sample.transform);
        }
        Self { batches }
    }

    #[must_use]
    pub fn batches(&self) -> &[InstanceBatch] {
        &self.batches
    }

    /// Total number of instances across batches.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|b| b.transforms.len()).sum()
    }

    /// Yields `(model, sample)` pairs in the order individual fence pieces
    /// are kept once spawned: last slot first.
    pub fn spawn_order<'s>(
        models: &'s ModelSet,
        samples: &'s [PlacementSample],
    ) -> impl Iterator<Item = (ModelId, &'s PlacementSample)> + 's {
        samples
            .iter()
            .rev()
            .filter_map(|s| models.model_for_slot(s.slot).map(|id| (id, s)))
    }
}
