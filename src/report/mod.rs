//! Terminal reporting for query results.

pub mod format;

pub use format::*;
