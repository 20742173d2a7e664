//! Query-result exports (CSV and JSON).

pub mod export;

pub use export::*;
