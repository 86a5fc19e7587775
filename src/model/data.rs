use crate::math::Vector3;

slotmap::new_key_type! {
    /// Unique identifier for a model in the model store.
    pub struct ModelId;
}

/// A placeable mesh-like asset.
///
/// Only the bounding box matters for placement. `extent` is the half-size
/// of the box, so a model spans `2 * extent.x` along the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    /// Display name of the asset.
    pub name: String,
    /// Bounding-box half-size, or `None` if the asset has no loadable bounds.
    pub extent: Option<Vector3>,
}

impl ModelData {
    /// Creates a model with a known bounding extent.
    #[must_use]
    pub fn new(name: impl Into<String>, extent: Vector3) -> Self {
        Self {
            name: name.into(),
            extent: Some(extent),
        }
    }

    /// Creates a model whose bounds could not be loaded.
    #[must_use]
    pub fn without_bounds(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extent: None,
        }
    }

    /// Returns the bounding-box half-size, if known.
    #[must_use]
    pub fn bounding_extent(&self) -> Option<Vector3> {
        self.extent
    }
}
