//! Domain types used throughout the query pipeline.
//!
//! This module defines:
//!
//! - the loaded dataset shape (`Dataset`, `DayRecord`, `LocationRecord`, `BrandSale`)
//! - query inputs (`DateKey`, `BrandFilter`, `BrandPair`)
//! - derived outputs (`AggregatedBrand`, `ChartSeries`, `SeriesFile`)

pub mod types;

pub use types::*;
