//! Ranking of aggregated brands by sold volume.

use crate::domain::AggregatedBrand;
use crate::error::AppError;

/// Order brands by `total_sold` descending and truncate to the first `n`.
///
/// The sort is stable: equal-volume brands retain their relative order from
/// the aggregation step's enumeration (no secondary name key). Fewer than `n`
/// brands returns all of them; `n == 0` is a contract violation.
pub fn top_n(aggregated: &[AggregatedBrand], n: usize) -> Result<Vec<AggregatedBrand>, AppError> {
    if n == 0 {
        return Err(AppError::invalid_request("Ranking requires n >= 1."));
    }

    let mut sorted = aggregated.to_vec();
    sorted.sort_by(|a, b| {
        b.total_sold
            .partial_cmp(&a.total_sold)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, total_sold: f64) -> AggregatedBrand {
        AggregatedBrand {
            name: name.to_string(),
            total_sold,
            efficiency: 0.8,
            quality: 0.9,
        }
    }

    #[test]
    fn top_five_orders_by_sold_descending() {
        let brands = vec![
            brand("A", 10.0),
            brand("B", 20.0),
            brand("C", 5.0),
            brand("D", 30.0),
            brand("E", 25.0),
            brand("F", 1.0),
        ];

        let out = top_n(&brands, 5).unwrap();
        let names: Vec<&str> = out.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["D", "E", "B", "A", "C"]);
        for pair in out.windows(2) {
            assert!(pair[0].total_sold >= pair[1].total_sold);
        }
    }

    #[test]
    fn fewer_brands_than_n_returns_all() {
        let brands = vec![brand("A", 1.0), brand("B", 2.0)];
        let out = top_n(&brands, 5).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "B");
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let brands = vec![brand("X", 10.0), brand("Y", 10.0), brand("Z", 10.0)];
        let out = top_n(&brands, 3).unwrap();
        let names: Vec<&str> = out.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn zero_n_is_a_contract_violation() {
        let err = top_n(&[], 0).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_input_is_fine() {
        let out = top_n(&[], 5).unwrap();
        assert!(out.is_empty());
    }
}
