pub mod curve;

pub use curve::{CoordinateSpace, Curve, EditableCurve, Polyline, Spline};
