//! Mathematical utilities: profile kernels and coordinate grids.

pub mod grid;
pub mod kernels;

pub use grid::*;
pub use kernels::*;
