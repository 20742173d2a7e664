//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the dataset (once, before any query)
//! - runs the requested query through the engine
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::cli::{Cli, Command, CompareArgs, DataArgs, DateArgs, OutputArgs, SampleArgs, TopArgs};
use crate::data::load::{dataset_stats, load_dataset, save_dataset};
use crate::data::sample::{SampleConfig, generate_sample};
use crate::domain::{BrandPair, ChartSeries, Dataset, DateKey};
use crate::error::AppError;
use crate::query::QueryEngine;

/// Env var naming the dataset JSON when `--data` is not given.
const DATA_ENV_VAR: &str = "BDA_DATA";

/// Entry point for the `bda` binary.
pub fn run() -> Result<(), AppError> {
    // Pick up BDA_DATA from a local .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Date(args) => handle_date(args),
        Command::Top(args) => handle_top(args),
        Command::Compare(args) => handle_compare(args),
        Command::Brands(args) => handle_brands(args),
        Command::Dates(args) => handle_dates(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_date(args: DateArgs) -> Result<(), AppError> {
    let dataset = load_from(&args.data)?;
    let engine = QueryEngine::new(&dataset);
    let series = engine.by_date(args.date);
    print_query_output("by-date", args.date, &dataset, &series, &args.output)
}

fn handle_top(args: TopArgs) -> Result<(), AppError> {
    let dataset = load_from(&args.data)?;
    let engine = QueryEngine::new(&dataset);
    let series = engine.top_brands(args.date, args.top)?;
    let query = format!("top-{}", args.top);
    print_query_output(&query, args.date, &dataset, &series, &args.output)
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let pair = BrandPair::new(args.brand_a, args.brand_b)?;
    let dataset = load_from(&args.data)?;
    let engine = QueryEngine::new(&dataset);
    let series = engine.compare(args.date, &pair);

    if series.len() < 2 {
        // A short result is valid data, but there is nothing to compare;
        // print what was found and suppress the chart.
        println!(
            "{}",
            crate::report::format_run_summary("compare", args.date, &dataset_stats(&dataset))
        );
        println!("{}", crate::report::format_series_table(&series));
        println!(
            "Insufficient data to compare: {} of 2 requested brands found on {}.",
            series.len(),
            args.date
        );
        write_exports(args.date, "compare", &series, &args.output)?;
        return Ok(());
    }

    print_query_output("compare", args.date, &dataset, &series, &args.output)
}

fn handle_brands(args: DataArgs) -> Result<(), AppError> {
    let dataset = load_from(&args)?;
    print!("{}", crate::report::format_list(&dataset.brand_names()));
    Ok(())
}

fn handle_dates(args: DataArgs) -> Result<(), AppError> {
    let dataset = load_from(&args)?;
    print!("{}", crate::report::format_list(&dataset.dates()));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let start = NaiveDate::from_ymd_opt(
        args.start.year,
        u32::from(args.start.month),
        u32::from(args.start.day),
    )
    .ok_or_else(|| {
        AppError::invalid_request(format!("Sample start {} is not a real calendar date.", args.start))
    })?;

    let config = SampleConfig {
        days: args.days,
        locations: args.locations,
        seed: args.seed,
        start,
    };
    let dataset = generate_sample(&config)?;
    save_dataset(&args.out, &dataset)?;

    let stats = dataset_stats(&dataset);
    println!(
        "Wrote {}: {} days | {} locations | {} entries | {} brands (seed {}).",
        args.out.display(),
        stats.n_days,
        stats.n_locations,
        stats.n_entries,
        stats.n_brands,
        args.seed
    );
    Ok(())
}

fn print_query_output(
    query: &str,
    date: DateKey,
    dataset: &Dataset,
    series: &ChartSeries,
    output: &OutputArgs,
) -> Result<(), AppError> {
    println!(
        "{}",
        crate::report::format_run_summary(query, date, &dataset_stats(dataset))
    );
    println!("{}", crate::report::format_series_table(series));

    if output.plot && !output.no_plot && !series.is_empty() {
        println!(
            "{}",
            crate::plot::render_ascii_plot(series, output.width, output.height)
        );
    }

    write_exports(date, query, series, output)
}

fn write_exports(
    date: DateKey,
    query: &str,
    series: &ChartSeries,
    output: &OutputArgs,
) -> Result<(), AppError> {
    if let Some(path) = &output.export {
        crate::io::export::write_series_csv(path, date, query, series)?;
    }
    if let Some(path) = &output.export_json {
        crate::io::export::write_series_json(path, date, query, series)?;
    }
    Ok(())
}

fn load_from(args: &DataArgs) -> Result<Dataset, AppError> {
    let path = resolve_data_path(args)?;
    load_dataset(&path)
}

fn resolve_data_path(args: &DataArgs) -> Result<PathBuf, AppError> {
    if let Some(path) = &args.data {
        return Ok(path.clone());
    }
    match std::env::var(DATA_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => Ok(PathBuf::from(v)),
        _ => Err(AppError::invalid_request(format!(
            "No dataset given. Pass --data FILE or set {DATA_ENV_VAR} (a .env file works too)."
        ))),
    }
}
