use tracing::debug;

use crate::error::Result;
use crate::geometry::{Curve, Spline};
use crate::model::{ModelSet, ModelStore};
use crate::operations::placement::{
    BuildLengthTable, InstanceBatches, LengthTable, PlacementSample, SampleTransforms,
};

use super::LinearFenceConfig;

/// A run of fence pieces laid along an existing curve.
#[derive(Debug, Clone)]
pub struct LinearFence<C = Spline> {
    curve: Option<C>,
    models: ModelSet,
    config: LinearFenceConfig,
}

impl<C: Curve> LinearFence<C> {
    /// Creates a fence along `curve`.
    #[must_use]
    pub fn new(curve: C, models: ModelSet, config: LinearFenceConfig) -> Self {
        Self {
            curve: Some(curve),
            models,
            config,
        }
    }

    /// Creates a fence that has no curve yet; it places nothing until one is set.
    #[must_use]
    pub fn without_curve(models: ModelSet, config: LinearFenceConfig) -> Self {
        Self {
            curve: None,
            models,
            config,
        }
    }

    /// Returns the curve, if one is set.
    #[must_use]
    pub fn curve(&self) -> Option<&C> {
        self.curve.as_ref()
    }

    /// Mutable access to the curve, if one is set.
    pub fn curve_mut(&mut self) -> Option<&mut C> {
        self.curve.as_mut()
    }

    /// Replaces or removes the curve.
    pub fn set_curve(&mut self, curve: Option<C>) {
        self.curve = curve;
    }

    /// Returns the model set cycled along the curve.
    #[must_use]
    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Replaces the model set.
    pub fn set_models(&mut self, models: ModelSet) {
        self.models = models;
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &LinearFenceConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: LinearFenceConfig) {
        self.config = config;
    }

    /// Footprints of the current model set at the configured size.
    #[must_use]
    pub fn length_table(&self, store: &ModelStore) -> LengthTable {
        BuildLengthTable::new(&self.models, self.config.size).execute(store)
    }

    /// Runs a full placement pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn placements(&self, store: &ModelStore) -> Result<Vec<PlacementSample>> {
        self.config.validate()?;
        let lengths = self.length_table(store);
        let samples = SampleTransforms::new(
            &lengths,
            self.config.gap,
            self.config.display_count,
            self.config.size,
        )
        .execute(self.curve.as_ref());
        debug!(
            models = self.models.len(),
            samples = samples.len(),
            "linear fence placement"
        );
        Ok(samples)
    }

    /// Runs a placement pass and groups the result per model.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn instance_batches(&self, store: &ModelStore) -> Result<InstanceBatches> {
        let samples = self.placements(store)?;
        Ok(InstanceBatches::from_samples(&self.models, &samples))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Polyline;
    use crate::math::{Point3, Vector3};
    use crate::model::ModelData;

    fn setup() -> (ModelStore, ModelSet) {
        let mut store = ModelStore::new();
        let a = store.add_model(ModelData::new("a", Vector3::new(1.0, 0.2, 1.0)));
        let b = store.add_model(ModelData::new("b", Vector3::new(1.5, 0.2, 1.0)));
        (store, ModelSet::new(vec![a, b]))
    }

    fn straight() -> Polyline {
        Polyline::new(&[Point3::origin(), Point3::new(100.0, 0.0, 0.0)]).unwrap()
    }

    #[test]
    fn places_along_curve() {
        let (store, models) = setup();
        let config = LinearFenceConfig {
            display_count: 4,
            size: 1.0,
            gap: 1.0,
        };
        let fence = LinearFence::new(straight(), models, config);
        let samples = fence.placements(&store).unwrap();
        let xs: Vec<_> = samples.iter().map(|s| s.transform.translation.x).collect();
        assert_eq!(xs.len(), 4);
        for (x, expected) in xs.iter().zip([0.0, 3.0, 7.0, 10.0]) {
            assert_relative_eq!(*x, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn missing_curve_places_nothing() {
        let (store, models) = setup();
        let fence = LinearFence::<Polyline>::without_curve(models, LinearFenceConfig::default());
        assert!(fence.placements(&store).unwrap().is_empty());
    }

    #[test]
    fn empty_models_place_nothing() {
        let (store, _) = setup();
        let config = LinearFenceConfig {
            display_count: 5,
            ..LinearFenceConfig::default()
        };
        let fence = LinearFence::new(straight(), ModelSet::default(), config);
        assert!(fence.placements(&store).unwrap().is_empty());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let (store, models) = setup();
        let config = LinearFenceConfig {
            size: -2.0,
            ..LinearFenceConfig::default()
        };
        let fence = LinearFence::new(straight(), models, config);
        assert!(fence.placements(&store).is_err());
    }

    #[test]
    fn batches_split_by_model() {
        let (store, models) = setup();
        let config = LinearFenceConfig {
            display_count: 5,
            ..LinearFenceConfig::default()
        };
        let fence = LinearFence::new(straight(), models, config);
        let batches = fence.instance_batches(&store).unwrap();
        assert_eq!(batches.instance_count(), 5);
        assert_eq!(batches.batches()[0].transforms.len(), 3);
        assert_eq!(batches.batches()[1].transforms.len(), 2);
    }
}
