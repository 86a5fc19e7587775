pub mod config;
mod helical;
mod linear;

pub use config::{HelicalFenceConfig, LinearFenceConfig};
pub use helical::HelicalFence;
pub use linear::LinearFence;
