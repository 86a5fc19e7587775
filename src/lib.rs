pub mod error;
pub mod fence;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{PalisadeError, Result};
pub use fence::{HelicalFence, HelicalFenceConfig, LinearFence, LinearFenceConfig};
