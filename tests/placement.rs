#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use palisade::geometry::{CoordinateSpace, Curve, EditableCurve, Polyline, Spline};
use palisade::math::{Point3, Vector3};
use palisade::model::{ModelData, ModelSet, ModelStore};
use palisade::operations::helical::SpiralParameters;
use palisade::operations::placement::{InstanceBatches, RevealMask};
use palisade::{HelicalFence, HelicalFenceConfig, LinearFence, LinearFenceConfig};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn store_with(extents: &[f64]) -> (ModelStore, ModelSet) {
    let mut store = ModelStore::new();
    let ids = extents
        .iter()
        .enumerate()
        .map(|(i, x)| store.add_model(ModelData::new(format!("m{i}"), Vector3::new(*x, 0.5, 1.0))))
        .collect();
    (store, ModelSet::new(ids))
}

#[test]
fn linear_fence_on_polyline() {
    init_tracing();
    // Footprints 2 and 3.
    let (store, models) = store_with(&[1.0, 1.5]);
    let curve = Polyline::new(&[Point3::origin(), Point3::new(20.0, 0.0, 0.0)]).unwrap();
    let config = LinearFenceConfig {
        display_count: 4,
        size: 1.0,
        gap: 1.0,
    };
    let fence = LinearFence::new(curve, models, config);
    let samples = fence.placements(&store).unwrap();

    let distances: Vec<_> = samples.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![0.0, 3.0, 7.0, 10.0]);
    for s in &samples {
        assert_relative_eq!(s.transform.translation.x, s.distance, epsilon = 1e-12);
        assert_relative_eq!(s.transform.rotation.yaw, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn linear_fence_on_spline_follows_arc_length() {
    init_tracing();
    let (store, models) = store_with(&[0.5]);
    let spline = Spline::new(&[
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 5.0, 0.0),
        Point3::new(20.0, 0.0, 0.0),
    ])
    .unwrap();
    let config = LinearFenceConfig {
        display_count: 6,
        size: 1.0,
        gap: 1.0,
    };
    let fence = LinearFence::new(spline, models, config);
    let samples = fence.placements(&store).unwrap();
    let curve = fence.curve().unwrap();
    for s in &samples {
        let expected = curve.transform_at_distance(s.distance, CoordinateSpace::World);
        assert_relative_eq!(s.transform.translation, expected.translation, epsilon = 1e-9);
    }
}

#[test]
fn helical_fence_unrolls() {
    init_tracing();
    let (store, models) = store_with(&[2.0, 3.0]);
    let config = HelicalFenceConfig {
        display_count: 8,
        spiral: SpiralParameters {
            point_interval: 30.0,
            ..SpiralParameters::default()
        },
        ..HelicalFenceConfig::default()
    };
    let mut fence = HelicalFence::new(models.clone(), config);
    let samples = fence.rebuild(&store).unwrap();
    assert_eq!(samples.len(), 8);
    assert!(fence.spline().length() >= fence.target_length());

    let visible = fence.reveal_mask(&samples, &store);
    let hidden = RevealMask::complement(&visible);
    assert_eq!(visible.len(), hidden.len());

    fence.set_progress(1.0).unwrap();
    assert!(fence.reveal_mask(&samples, &store).iter().all(|v| !v));

    let order: Vec<_> = InstanceBatches::spawn_order(&models, &samples).map(|(_, s)| s.slot).collect();
    assert_eq!(order, (0..8).rev().collect::<Vec<_>>());
}

#[test]
fn helical_fence_with_nothing_to_place() {
    init_tracing();
    let (store, models) = store_with(&[2.0]);
    let config = HelicalFenceConfig {
        display_count: 0,
        ..HelicalFenceConfig::default()
    };
    let mut fence = HelicalFence::new(models, config);
    assert!(fence.rebuild(&store).unwrap().is_empty());
    assert!(fence.spline().control_points().is_empty());
}
