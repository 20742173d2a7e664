//! Dataset JSON read/write and shape validation.
//!
//! The on-disk schema is the app's bundled `data.json` shape:
//!
//! ```json
//! { "data": [ { "day": 1, "month": 6, "year": 2024,
//!               "locations": [ { "sold": [ { "name": "...", "sold": 10,
//!                                            "efficiency": 0.9, "quality": 0.8 } ] } ] } ] }
//! ```
//!
//! Malformed datasets are a loader-side error (exit code 3) with enough
//! context to find the offending record; the query core downstream assumes a
//! well-formed `Dataset` and never re-validates.

use std::fs::File;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::AppError;

/// Counts describing a loaded dataset, for run summaries.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_days: usize,
    pub n_locations: usize,
    pub n_entries: usize,
    pub n_brands: usize,
}

/// Load and validate a dataset JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::dataset(format!("Failed to open dataset '{}': {e}", path.display()))
    })?;

    let dataset: Dataset = serde_json::from_reader(file)
        .map_err(|e| AppError::dataset(format!("Invalid dataset JSON '{}': {e}", path.display())))?;

    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Parse and validate a dataset from a JSON string.
pub fn parse_dataset(text: &str) -> Result<Dataset, AppError> {
    let dataset: Dataset = serde_json::from_str(text)
        .map_err(|e| AppError::dataset(format!("Invalid dataset JSON: {e}")))?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Write a dataset JSON file (pretty-printed, loader-compatible).
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::dataset(format!("Failed to create dataset '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, dataset)
        .map_err(|e| AppError::dataset(format!("Failed to write dataset JSON: {e}")))?;
    Ok(())
}

/// Validate basic shape invariants the query core relies on.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AppError> {
    for (day_idx, day) in dataset.data.iter().enumerate() {
        if !(1..=31).contains(&day.day) {
            return Err(AppError::dataset(format!(
                "Record #{day_idx}: day {} out of range 1-31.",
                day.day
            )));
        }
        if !(1..=12).contains(&day.month) {
            return Err(AppError::dataset(format!(
                "Record #{day_idx}: month {} out of range 1-12.",
                day.month
            )));
        }

        for (loc_idx, location) in day.locations.iter().enumerate() {
            for (sale_idx, sale) in location.sold.iter().enumerate() {
                let at = format!(
                    "Record #{day_idx} ({}), location #{loc_idx}, entry #{sale_idx}",
                    day.date()
                );
                if sale.name.trim().is_empty() {
                    return Err(AppError::dataset(format!("{at}: empty brand name.")));
                }
                if !sale.sold.is_finite() || sale.sold < 0.0 {
                    return Err(AppError::dataset(format!(
                        "{at}: `sold` must be finite and >= 0 (got {}).",
                        sale.sold
                    )));
                }
                if !sale.efficiency.is_finite() {
                    return Err(AppError::dataset(format!("{at}: non-finite `efficiency`.")));
                }
                if !sale.quality.is_finite() {
                    return Err(AppError::dataset(format!("{at}: non-finite `quality`.")));
                }
            }
        }
    }
    Ok(())
}

/// Compute summary counts over a loaded dataset.
pub fn dataset_stats(dataset: &Dataset) -> DatasetStats {
    let mut n_locations = 0;
    let mut n_entries = 0;
    for day in &dataset.data {
        n_locations += day.locations.len();
        for location in &day.locations {
            n_entries += location.sold.len();
        }
    }
    DatasetStats {
        n_days: dataset.data.len(),
        n_locations,
        n_entries,
        n_brands: dataset.brand_names().len(),
    }
}
