//! Two-brand comparison selection.

use crate::domain::{AggregatedBrand, BrandPair};

/// Extract the two requested brands from an aggregated collection.
///
/// The output order follows the order names were supplied in the pair. A
/// requested brand with no data on the day is dropped rather than failing:
/// a short result (zero or one entries) means "insufficient data to compare"
/// and the caller decides how to present that.
pub fn select_pair(aggregated: &[AggregatedBrand], pair: &BrandPair) -> Vec<AggregatedBrand> {
    pair.names()
        .iter()
        .filter_map(|name| aggregated.iter().find(|b| b.name == *name).cloned())
        .collect()
}
