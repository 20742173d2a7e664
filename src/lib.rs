//! `bda-analytics` library crate.
//!
//! The binary (`bda`) is a thin wrapper around this library so that:
//!
//! - the query core is testable without spawning processes
//! - modules are reusable (e.g., a future GUI or service front-end)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod query;
pub mod report;
