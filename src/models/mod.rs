//! Line profile models.
//!
//! Models are small, pure value objects so that scoring code can stay generic
//! over whichever components a caller combines.

pub mod composite;
pub mod mapper;
pub mod profile;

pub use composite::*;
pub use mapper::*;
pub use profile::*;
