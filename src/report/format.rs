//! Formatted terminal output.
//!
//! We keep formatting in one place so:
//! - the query code stays clean and testable
//! - output changes are localized (important for golden tests)
//!
//! Formatting applies display rounding only; series values themselves are
//! never transformed by the query core.

use crate::data::load::DatasetStats;
use crate::domain::{ChartSeries, DateKey};

/// Format the run header: which query ran, against what.
pub fn format_run_summary(query: &str, date: DateKey, stats: &DatasetStats) -> String {
    let mut out = String::new();
    out.push_str("=== bda - Beer Sales Analytics ===\n");
    out.push_str(&format!("Query: {query}\n"));
    out.push_str(&format!("Date: {date}\n"));
    out.push_str(&format!(
        "Dataset: {} days | {} locations | {} entries | {} brands\n",
        stats.n_days, stats.n_locations, stats.n_entries, stats.n_brands
    ));
    out
}

/// Format a chart series as an aligned brand table.
///
/// An empty series renders a placeholder line rather than an empty table:
/// "no data" is a valid outcome the reader should see stated.
pub fn format_series_table(series: &ChartSeries) -> String {
    if series.is_empty() {
        return "(no data for this selection)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>12}\n",
        "brand", "sold", "efficiency", "quality"
    ));
    out.push_str(&format!(
        "{:-<24} {:-<12} {:-<12} {:-<12}\n",
        "", "", "", ""
    ));

    for i in 0..series.len() {
        out.push_str(&format!(
            "{:<24} {:>12.2} {:>12.3} {:>12.3}\n",
            truncate(&series.labels[i], 24),
            series.sold[i],
            series.efficiency[i],
            series.quality[i],
        ));
    }

    out
}

/// Format a plain name-per-line list (brand and date pickers).
pub fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{item}\n"));
    }
    if items.is_empty() {
        out.push_str("(none)\n");
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
