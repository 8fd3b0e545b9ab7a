//! Funding Insights - Startup Funding CSV Cleaning & Aggregation
//!
//! Command line entry point: load, clean, aggregate, report.

use anyhow::{Context, Result};
use clap::Parser;
use funding_insights::charts::StaticChartRenderer;
use funding_insights::cli::Args;
use funding_insights::data::{clean_table, DataLoader, LoaderError};
use funding_insights::logging::init_logging;
use funding_insights::report::{stage_preview, summary_text, RunReport};
use funding_insights::stats::FundingCalculator;
use tracing::{info, warn};

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let table = match DataLoader::load_csv(&args.input) {
        Ok(df) => df,
        Err(e @ LoaderError::FileNotFound(_)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    if !args.json {
        println!("Data loaded successfully.");
    }

    let cleaned = clean_table(table, |stage, df| {
        if !args.json {
            println!("{}", stage_preview(stage, df, args.preview_rows));
        }
    })
    .context("cleaning failed")?;

    let summary = FundingCalculator::summarize(&cleaned.table).context("aggregation failed")?;
    let report = RunReport::new(&cleaned, summary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summary_text(&report));
    }

    if args.no_charts {
        return Ok(());
    }
    let charts = StaticChartRenderer::render_all(&report.summary, &args.out_dir)?;
    for path in &charts {
        if !args.json {
            println!("Chart saved: {}", path.display());
        }
        if args.open {
            if let Err(e) = open::that(path) {
                warn!(path = %path.display(), "could not open chart: {e}");
            }
        }
    }

    info!(rows = report.rows_final, "done");
    Ok(())
}
