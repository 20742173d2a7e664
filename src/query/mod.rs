//! The query engine: the three supported query shapes over a loaded dataset.
//!
//! Pipeline per query:
//!
//! - date match -> aggregation -> (ranking | pair selection) -> series build
//!
//! Every query is a pure function of `(&Dataset, inputs)`: no I/O, no shared
//! mutable state, fresh output allocations per call. "Date not found" and
//! "brand absent" surface as empty/partial series, never as errors.

use crate::domain::{BrandFilter, BrandPair, ChartSeries, Dataset, DateKey};
use crate::error::AppError;

pub mod aggregate;
pub mod compare;
pub mod rank;
pub mod series;

pub use aggregate::aggregate_brands;
pub use compare::select_pair;
pub use rank::top_n;
pub use series::build_series;

/// How many brands the top-brands query returns by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Borrowing facade over an immutable dataset.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// All brands aggregated for an exact date, in first-seen order.
    pub fn by_date(&self, date: DateKey) -> ChartSeries {
        let days = self.dataset.find_by_date(date);
        let aggregated = aggregate_brands(&days, &BrandFilter::All);
        build_series(&aggregated)
    }

    /// The `n` best-selling brands on a date, sold volume descending.
    pub fn top_brands(&self, date: DateKey, n: usize) -> Result<ChartSeries, AppError> {
        let days = self.dataset.find_by_date(date);
        let aggregated = aggregate_brands(&days, &BrandFilter::All);
        let ranked = top_n(&aggregated, n)?;
        Ok(build_series(&ranked))
    }

    /// Side-by-side comparison of exactly two brands on a date.
    ///
    /// The result may hold fewer than two entries when a requested brand has
    /// no data on the day.
    pub fn compare(&self, date: DateKey, pair: &BrandPair) -> ChartSeries {
        let days = self.dataset.find_by_date(date);
        let filter = BrandFilter::named(pair.names().map(str::to_string));
        let aggregated = aggregate_brands(&days, &filter);
        let selected = select_pair(&aggregated, pair);
        build_series(&selected)
    }
}
