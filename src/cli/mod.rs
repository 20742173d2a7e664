//! Command-line parsing for the beer-sales analytics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the query/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::DateKey;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bda", version, about = "Daily beer-sales analytics (by-date, top-5, compare)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every brand's aggregated numbers for one date.
    Date(DateArgs),
    /// List the best-selling brands for one date (top 5 by default).
    Top(TopArgs),
    /// Compare exactly two brands side by side for one date.
    Compare(CompareArgs),
    /// List all distinct brand names in the dataset.
    Brands(DataArgs),
    /// List all dates present in the dataset.
    Dates(DataArgs),
    /// Generate a synthetic dataset JSON (deterministic for a given seed).
    Sample(SampleArgs),
}

/// Dataset selection shared by every data-reading command.
#[derive(Debug, Parser, Clone)]
pub struct DataArgs {
    /// Dataset JSON file. Falls back to the BDA_DATA env var (.env honored).
    #[arg(long, value_name = "JSON")]
    pub data: Option<PathBuf>,
}

/// Output options shared by the query commands.
#[derive(Debug, Parser, Clone)]
pub struct OutputArgs {
    /// Render an ASCII plot under the table (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the series to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct DateArgs {
    /// Date to query (DD/MM/YYYY, DD-MM-YYYY, or YYYY-MM-DD).
    #[arg(value_name = "DATE")]
    pub date: DateKey,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser)]
pub struct TopArgs {
    /// Date to query (DD/MM/YYYY, DD-MM-YYYY, or YYYY-MM-DD).
    #[arg(value_name = "DATE")]
    pub date: DateKey,

    /// How many brands to return.
    #[arg(long, default_value_t = crate::query::DEFAULT_TOP_N)]
    pub top: usize,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Date to query (DD/MM/YYYY, DD-MM-YYYY, or YYYY-MM-DD).
    #[arg(value_name = "DATE")]
    pub date: DateKey,

    /// First brand name (exact match).
    #[arg(value_name = "BRAND_A")]
    pub brand_a: String,

    /// Second brand name (exact match, distinct from the first).
    #[arg(value_name = "BRAND_B")]
    pub brand_b: String,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Output dataset JSON path.
    #[arg(long, value_name = "JSON")]
    pub out: PathBuf,

    /// Number of consecutive calendar days to generate.
    #[arg(long, default_value_t = 30)]
    pub days: usize,

    /// Number of locations per day.
    #[arg(long, default_value_t = 3)]
    pub locations: usize,

    /// Random seed (same seed, same dataset).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// First calendar day (must be a real date).
    #[arg(long, default_value = "1/1/2024")]
    pub start: DateKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_compare_invocation() {
        let cli = Cli::try_parse_from([
            "bda", "compare", "3/11/2023", "Amber Crown", "Iron Stout", "--no-plot",
        ])
        .unwrap();
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.date, DateKey::new(3, 11, 2023));
                assert_eq!(args.brand_a, "Amber Crown");
                assert_eq!(args.brand_b, "Iron Stout");
                assert!(args.output.no_plot);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn top_defaults_to_five() {
        let cli = Cli::try_parse_from(["bda", "top", "2023-11-03"]).unwrap();
        match cli.command {
            Command::Top(args) => assert_eq!(args.top, 5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["bda", "date", "not-a-date"]).is_err());
    }
}
