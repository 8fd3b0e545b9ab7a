//! Command line options.

use clap::Parser;
use std::path::PathBuf;

/// Clean a startup funding CSV and report funding totals, top startups,
/// top industries and the monthly trend.
#[derive(Parser, Debug, Clone)]
#[command(name = "funding_insights", version, about)]
pub struct Args {
    /// Funding dataset to read
    #[arg(default_value = "startup_funding.csv")]
    pub input: PathBuf,

    /// Directory the chart PNGs are written to
    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Rows shown in each stage preview
    #[arg(long, default_value_t = 5)]
    pub preview_rows: usize,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Open the rendered charts with the system viewer
    #[arg(long, conflicts_with = "no_charts")]
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["funding_insights"]).unwrap();
        assert_eq!(args.input, PathBuf::from("startup_funding.csv"));
        assert_eq!(args.out_dir, PathBuf::from("charts"));
        assert_eq!(args.preview_rows, 5);
        assert!(!args.no_charts && !args.json && !args.open);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "funding_insights",
            "data/funding.csv",
            "--out-dir",
            "out",
            "--preview-rows",
            "2",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("data/funding.csv"));
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert_eq!(args.preview_rows, 2);
        assert!(args.json);
    }

    #[test]
    fn test_open_conflicts_with_no_charts() {
        assert!(Args::try_parse_from(["funding_insights", "--no-charts", "--open"]).is_err());
    }
}
