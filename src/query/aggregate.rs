//! Per-brand aggregation of a day's location records.
//!
//! All matched day records are treated as one logical day: their locations
//! are flattened into a single entry stream before grouping. Grouping is by
//! exact brand name, preserving first-seen order so downstream ranking has a
//! deterministic tie-break.

use std::collections::HashMap;

use crate::domain::{AggregatedBrand, BrandFilter, DayRecord};

/// Running totals for one brand while scanning entries.
#[derive(Debug, Default)]
struct BrandAccumulator {
    total_sold: f64,
    // Sold-weighted and plain sums; the plain mean is the fallback when the
    // group's total sold is zero (weights would all be zero).
    efficiency_weighted: f64,
    quality_weighted: f64,
    efficiency_sum: f64,
    quality_sum: f64,
    entries: usize,
}

impl BrandAccumulator {
    fn add(&mut self, sold: f64, efficiency: f64, quality: f64) {
        self.total_sold += sold;
        self.efficiency_weighted += sold * efficiency;
        self.quality_weighted += sold * quality;
        self.efficiency_sum += efficiency;
        self.quality_sum += quality;
        self.entries += 1;
    }

    fn finish(self, name: String) -> AggregatedBrand {
        let (efficiency, quality) = if self.total_sold > 0.0 {
            (
                self.efficiency_weighted / self.total_sold,
                self.quality_weighted / self.total_sold,
            )
        } else {
            let n = self.entries.max(1) as f64;
            (self.efficiency_sum / n, self.quality_sum / n)
        };

        AggregatedBrand {
            name,
            total_sold: self.total_sold,
            efficiency,
            quality,
        }
    }
}

/// Flatten, filter, and group the matched day records into per-brand views.
///
/// `sold` is summed per brand across all locations; `efficiency` and
/// `quality` are merged as the sold-weighted mean of the contributing
/// entries. A filtered-for name that never appears is simply absent from the
/// output.
///
/// The output order is the first-seen order of brand names in the flattened
/// entry stream.
pub fn aggregate_brands(days: &[&DayRecord], filter: &BrandFilter) -> Vec<AggregatedBrand> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, BrandAccumulator> = HashMap::new();

    for day in days {
        for location in &day.locations {
            for sale in &location.sold {
                if !filter.admits(&sale.name) {
                    continue;
                }
                let acc = groups.entry(sale.name.clone()).or_insert_with(|| {
                    order.push(sale.name.clone());
                    BrandAccumulator::default()
                });
                acc.add(sale.sold, sale.efficiency, sale.quality);
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let acc = groups.remove(&name).unwrap_or_default();
            acc.finish(name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BrandSale, LocationRecord};

    fn day(locations: Vec<Vec<BrandSale>>) -> DayRecord {
        DayRecord {
            day: 1,
            month: 6,
            year: 2024,
            locations: locations
                .into_iter()
                .map(|sold| LocationRecord { sold })
                .collect(),
        }
    }

    fn sale(name: &str, sold: f64, efficiency: f64, quality: f64) -> BrandSale {
        BrandSale {
            name: name.to_string(),
            sold,
            efficiency,
            quality,
        }
    }

    #[test]
    fn sums_sold_across_locations() {
        let d = day(vec![
            vec![sale("A", 10.0, 0.9, 0.8), sale("B", 20.0, 0.7, 0.95)],
            vec![sale("A", 15.0, 0.6, 0.5)],
        ]);

        let out = aggregate_brands(&[&d], &BrandFilter::All);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "A");
        assert!((out[0].total_sold - 25.0).abs() < 1e-12);
        assert_eq!(out[1].name, "B");
        assert!((out[1].total_sold - 20.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_are_sold_weighted_means() {
        let d = day(vec![
            vec![sale("A", 10.0, 0.9, 0.8)],
            vec![sale("A", 30.0, 0.5, 0.4)],
        ]);

        let out = aggregate_brands(&[&d], &BrandFilter::All);
        // (10*0.9 + 30*0.5) / 40 = 0.6, (10*0.8 + 30*0.4) / 40 = 0.5
        assert!((out[0].efficiency - 0.6).abs() < 1e-12);
        assert!((out[0].quality - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_sold_group_falls_back_to_plain_mean() {
        let d = day(vec![vec![
            sale("A", 0.0, 0.9, 0.8),
            sale("A", 0.0, 0.7, 0.6),
        ]]);

        let out = aggregate_brands(&[&d], &BrandFilter::All);
        assert!((out[0].efficiency - 0.8).abs() < 1e-12);
        assert!((out[0].quality - 0.7).abs() < 1e-12);
    }

    #[test]
    fn restriction_drops_unlisted_brands() {
        let d = day(vec![vec![
            sale("A", 10.0, 0.9, 0.8),
            sale("B", 20.0, 0.7, 0.95),
        ]]);

        let filter = BrandFilter::named(["B", "Ghost"]);
        let out = aggregate_brands(&[&d], &filter);
        // "Ghost" never appears and is simply absent, not an error.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "B");
    }

    #[test]
    fn duplicate_date_records_union_into_one_logical_day() {
        let d1 = day(vec![vec![sale("A", 10.0, 0.9, 0.8)]]);
        let d2 = day(vec![vec![sale("A", 5.0, 0.9, 0.8), sale("B", 1.0, 0.5, 0.5)]]);

        let out = aggregate_brands(&[&d1, &d2], &BrandFilter::All);
        assert_eq!(out.len(), 2);
        assert!((out[0].total_sold - 15.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = aggregate_brands(&[], &BrandFilter::All);
        assert!(out.is_empty());
    }
}
