pub mod data;
pub mod set;

pub use data::{ModelData, ModelId};
pub use set::ModelSet;

use crate::error::ModelError;
use slotmap::SlotMap;

/// Arena that owns every model a fence can reference.
///
/// Fences refer to models through [`ModelId`]s, so a model shared by
/// several fences is stored once and removing it only leaves dangling ids,
/// which placement treats as models without bounds.
#[derive(Debug, Default)]
pub struct ModelStore {
    models: SlotMap<ModelId, ModelData>,
}

impl ModelStore {
    /// Creates a new, empty model store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a model and returns its ID.
    pub fn add_model(&mut self, data: ModelData) -> ModelId {
        self.models.insert(data)
    }

    /// Returns a reference to the model data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the store.
    pub fn model(&self, id: ModelId) -> Result<&ModelData, ModelError> {
        self.models
            .get(id)
            .ok_or_else(|| ModelError::NotFound(format!("{id:?}")))
    }

    /// Removes a model, returning its data if it was present.
    pub fn remove_model(&mut self, id: ModelId) -> Option<ModelData> {
        self.models.remove(id)
    }

    /// Returns the number of stored models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
