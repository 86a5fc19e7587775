use super::ModelId;

/// Ordered list of models cycled through round-robin along a fence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSet {
    ids: Vec<ModelId>,
}

impl ModelSet {
    /// Creates a model set from ids in placement order.
    #[must_use]
    pub fn new(ids: Vec<ModelId>) -> Self {
        Self { ids }
    }

    /// Appends a model to the end of the cycle.
    pub fn push(&mut self, id: ModelId) {
        self.ids.push(id);
    }

    /// Returns the ids in placement order.
    #[must_use]
    pub fn ids(&self) -> &[ModelId] {
        &self.ids
    }

    /// Number of entries in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the model occupying `slot`, cycling through the set.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn model_for_slot(&self, slot: usize) -> Option<ModelId> {
        if self.ids.is_empty() {
            return None;
        }
        Some(self.ids[slot % self.ids.len()])
    }
}

impl FromIterator<ModelId> for ModelSet {
    fn from_iter<I: IntoIterator<Item = ModelId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
