//! Dataset input: JSON load/save and synthetic sample generation.

pub mod load;
pub mod sample;

pub use load::*;
pub use sample::*;
