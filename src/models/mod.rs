pub mod container;
pub mod estimate;
pub mod product;

pub use container::{ContainerRate, ContainerSize};
pub use estimate::LandedCostEstimate;
pub use product::ProductVolume;
