//! Line datasets: raw data + noise, masking, and synthetic generation.

pub mod dataset;
pub mod mask;
pub mod masked;
pub mod simulate;

pub use dataset::*;
pub use mask::*;
pub use masked::*;
pub use simulate::*;
