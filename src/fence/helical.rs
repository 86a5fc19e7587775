use tracing::debug;

use crate::error::Result;
use crate::geometry::{Curve, EditableCurve, Spline};
use crate::math::Point3;
use crate::model::{ModelSet, ModelStore};
use crate::operations::helical::{target_length, RepositionRoot, RootPlacement, SynthesizeSpiral};
use crate::operations::placement::{
    BuildLengthTable, InstanceBatches, LengthTable, PlacementSample, RevealMask, SampleDirection,
    SampleTransforms,
};

use super::config::check_progress;
use super::{HelicalFenceConfig, LinearFence};

/// A fence wound into a spiral that it synthesizes for itself.
///
/// [`HelicalFence::rebuild`] sizes and generates the spiral, then places the
/// models along it from the outer end inward, each turned to face back along
/// the spiral. Changing the progress afterwards only moves the spiral's
/// frame, so the pieces slide along with it.
#[derive(Debug, Clone, Default)]
pub struct HelicalFence {
    spline: Spline,
    models: ModelSet,
    config: HelicalFenceConfig,
    points: Vec<Point3>,
    target_length: f64,
}

impl HelicalFence {
    /// Creates a fence; call [`HelicalFence::rebuild`] to generate the spiral.
    #[must_use]
    pub fn new(models: ModelSet, config: HelicalFenceConfig) -> Self {
        Self {
            models,
            config,
            ..Self::default()
        }
    }

    /// Returns the synthesized spiral.
    #[must_use]
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// Mutable access to the spline, e.g. to set its owner transform.
    pub fn spline_mut(&mut self) -> &mut Spline {
        &mut self.spline
    }

    /// Returns the model set cycled along the spiral.
    #[must_use]
    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Replaces the model set; takes effect on the next rebuild.
    pub fn set_models(&mut self, models: ModelSet) {
        self.models = models;
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &HelicalFenceConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next rebuild.
    pub fn set_config(&mut self, config: HelicalFenceConfig) {
        self.config = config;
    }

    /// Takes the model set and display count of `fence`, so slot `i` here
    /// and slot `i` there hold the same model.
    ///
    /// Pair with [`RevealMask::complement`] to show on the straight fence
    /// exactly the slots the spiral hides. Takes effect on the next rebuild.
    pub fn follow<C: Curve>(&mut self, fence: &LinearFence<C>) {
        self.models = fence.models().clone();
        self.config.display_count = fence.config().display_count;
    }

    /// Control points produced by the last rebuild.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Length the spiral was grown to cover in the last rebuild.
    #[must_use]
    pub fn target_length(&self) -> f64 {
        self.target_length
    }

    /// Footprints of the current model set at the configured size.
    #[must_use]
    pub fn length_table(&self, store: &ModelStore) -> LengthTable {
        BuildLengthTable::new(&self.models, self.config.size).execute(store)
    }

    /// Regenerates the spiral and runs a full placement pass.
    ///
    /// With no models or a zero display count the spiral is cleared and
    /// nothing is placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the spiral does
    /// not converge.
    pub fn rebuild(&mut self, store: &ModelStore) -> Result<Vec<PlacementSample>> {
        self.config.validate()?;
        let lengths = self.length_table(store);
        if lengths.is_empty() || self.config.display_count == 0 {
            self.spline.clear_control_points();
            self.points.clear();
            self.target_length = 0.0;
            return Ok(Vec::new());
        }

        self.target_length = target_length(&lengths, self.config.display_count);
        self.points =
            SynthesizeSpiral::new(self.config.spiral, self.target_length).execute(&mut self.spline)?;
        RepositionRoot::new(self.config.progress, self.config.spiral.around)
            .execute(&mut self.spline)?;

        let samples = self.sample(&lengths);
        debug!(
            target_length = self.target_length,
            spiral_length = self.spline.length(),
            points = self.points.len(),
            samples = samples.len(),
            "helical fence rebuilt"
        );
        Ok(samples)
    }

    /// Moves the spiral's frame for a new progress value without regenerating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `progress` is outside `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) -> Result<RootPlacement> {
        check_progress(progress)?;
        self.config.progress = progress;
        RepositionRoot::new(progress, self.config.spiral.around).execute(&mut self.spline)
    }

    /// Samples the current spiral without regenerating it.
    #[must_use]
    pub fn placements(&self, store: &ModelStore) -> Vec<PlacementSample> {
        let lengths = self.length_table(store);
        self.sample(&lengths)
    }

    /// Groups the current placements per model.
    #[must_use]
    pub fn instance_batches(&self, store: &ModelStore) -> InstanceBatches {
        InstanceBatches::from_samples(&self.models, &self.placements(store))
    }

    /// Which of `samples` remain visible at the current progress.
    #[must_use]
    pub fn reveal_mask(&self, samples: &[PlacementSample], store: &ModelStore) -> Vec<bool> {
        let lengths = self.length_table(store);
        RevealMask::new(&lengths, self.config.gap, self.config.progress)
            .execute(samples, self.spline.length())
    }

    fn sample(&self, lengths: &LengthTable) -> Vec<PlacementSample> {
        SampleTransforms::new(
            lengths,
            self.config.gap,
            self.config.display_count,
            self.config.size,
        )
        .direction(SampleDirection::FromEnd)
        .yaw_flip(true)
        .execute(Some(&self.spline))
    }
}
