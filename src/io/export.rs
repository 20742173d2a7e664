//! Export query results for spreadsheets and downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{ChartSeries, DateKey, SeriesFile};
use crate::error::AppError;

/// Write a chart series to a CSV file, one row per brand.
pub fn write_series_csv(
    path: &Path,
    date: DateKey,
    query: &str,
    series: &ChartSeries,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::invalid_request(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "date,query,brand,sold,efficiency,quality")
        .map_err(|e| AppError::invalid_request(format!("Failed to write export CSV header: {e}")))?;

    for i in 0..series.len() {
        writeln!(
            file,
            "{},{},{},{:.10},{:.10},{:.10}",
            date,
            query,
            csv_field(&series.labels[i]),
            series.sold[i],
            series.efficiency[i],
            series.quality[i],
        )
        .map_err(|e| AppError::invalid_request(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a chart series to a JSON file (the portable `SeriesFile` schema).
pub fn write_series_json(
    path: &Path,
    date: DateKey,
    query: &str,
    series: &ChartSeries,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_request(format!(
            "Failed to create export JSON '{}': {e}",
            path.display()
        ))
    })?;

    let out = SeriesFile {
        tool: "bda".to_string(),
        date,
        query: query.to_string(),
        series: series.clone(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::invalid_request(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

// Brand names may contain commas; quote when needed.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Amber Crown"), "Amber Crown");
        assert_eq!(csv_field("Hop, Skip"), "\"Hop, Skip\"");
        assert_eq!(csv_field("Say \"Ale\""), "\"Say \"\"Ale\"\"\"");
    }
}
