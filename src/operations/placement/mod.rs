mod instance_batches;
mod length_table;
mod reveal_mask;
mod sample_transforms;

pub use instance_batches::{InstanceBatch, InstanceBatches};
pub use length_table::{BuildLengthTable, LengthTable};
pub use reveal_mask::RevealMask;
pub use sample_transforms::{PlacementSample, SampleDirection, SampleTransforms};
