//! Chart series construction.

use crate::domain::{AggregatedBrand, ChartSeries};

/// Map an ordered list of aggregated brands to the parallel-series table.
///
/// Deterministic and total: each brand contributes one label and one entry in
/// each value sequence, in input order. Empty input yields a series with all
/// sequences empty (the valid "no data" state). No rounding here; display
/// precision is the presentation layer's concern.
pub fn build_series(ordered: &[AggregatedBrand]) -> ChartSeries {
    let mut series = ChartSeries {
        labels: Vec::with_capacity(ordered.len()),
        sold: Vec::with_capacity(ordered.len()),
        efficiency: Vec::with_capacity(ordered.len()),
        quality: Vec::with_capacity(ordered.len()),
    };

    for brand in ordered {
        series.labels.push(brand.name.clone());
        series.sold.push(brand.total_sold);
        series.efficiency.push(brand.efficiency);
        series.quality.push(brand.quality);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_stay_parallel() {
        let brands = vec![
            AggregatedBrand {
                name: "A".to_string(),
                total_sold: 10.0,
                efficiency: 0.9,
                quality: 0.8,
            },
            AggregatedBrand {
                name: "B".to_string(),
                total_sold: 20.0,
                efficiency: 0.7,
                quality: 0.95,
            },
        ];

        let series = build_series(&brands);
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.sold, vec![10.0, 20.0]);
        assert_eq!(series.efficiency, vec![0.9, 0.7]);
        assert_eq!(series.quality, vec![0.8, 0.95]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn empty_input_is_the_no_data_state() {
        let series = build_series(&[]);
        assert!(series.is_empty());
        assert!(series.sold.is_empty());
        assert!(series.efficiency.is_empty());
        assert!(series.quality.is_empty());
    }
}
