//! Console and JSON presentation of a cleaning run.

use crate::data::{CleanedTable, Stage};
use crate::stats::{FundingSummary, GroupTotal};
use polars::prelude::*;
use serde::Serialize;

/// Row counts and aggregates for one run, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub rows_loaded: usize,
    pub rows_after_date_cleaning: usize,
    pub duplicates_removed: usize,
    pub rows_final: usize,
    pub summary: FundingSummary,
}

impl RunReport {
    pub fn new(cleaned: &CleanedTable, summary: FundingSummary) -> Self {
        Self {
            rows_loaded: cleaned.rows_loaded,
            rows_after_date_cleaning: cleaned.rows_after_date_cleaning,
            duplicates_removed: cleaned.duplicates_removed,
            rows_final: cleaned.table.height(),
            summary,
        }
    }
}

/// Dollar figure with thousands separators and no decimals, e.g. `$1,234,568`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Text shown for a pipeline stage: column list after normalization, a
/// preview of the first rows otherwise.
pub fn stage_preview(stage: Stage, df: &DataFrame, rows: usize) -> String {
    match stage {
        Stage::ColumnsNormalized => {
            let names: Vec<String> = df
                .get_column_names()
                .iter()
                .map(|n| n.to_string())
                .collect();
            format!("\n{}:\n{}", stage, names.join(", "))
        }
        _ => format!(
            "\n{} ({} rows):\n{}",
            stage,
            df.height(),
            df.head(Some(rows))
        ),
    }
}

fn ranking(title: &str, groups: &[GroupTotal]) -> String {
    let width = groups.iter().map(|g| g.name.chars().count()).max().unwrap_or(0);
    let mut out = format!("\n{title}:\n");
    if groups.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, group) in groups.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<width$}  {}\n",
            i + 1,
            group.name,
            format_usd(group.total),
        ));
    }
    out
}

/// Totals and top-10 listings.
pub fn summary_text(report: &RunReport) -> String {
    let summary = &report.summary;
    let mut out = format!(
        "\nRemoved {} duplicate rows.\nRows: {} loaded, {} with valid dates, {} after cleaning.\n",
        report.duplicates_removed,
        report.rows_loaded,
        report.rows_after_date_cleaning,
        report.rows_final,
    );
    out.push_str(&format!(
        "\nTotal Funding: {}\n",
        format_usd(summary.total_funding)
    ));
    out.push_str(&format!(
        "Average Funding per Deal: {}\n",
        format_usd(summary.avg_funding)
    ));
    out.push_str(&ranking("Top 10 Startups by Funding", &summary.top_startups));
    out.push_str(&ranking("Top 10 Industries by Funding", &summary.top_industries));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "$0")]
    #[case(999.4, "$999")]
    #[case(1000.0, "$1,000")]
    #[case(1234567.5, "$1,234,568")]
    #[case(100000.0, "$100,000")]
    #[case(-2500.0, "-$2,500")]
    #[case(f64::NAN, "n/a")]
    fn test_format_usd(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_usd(value), expected);
    }

    fn report() -> RunReport {
        RunReport {
            rows_loaded: 5,
            rows_after_date_cleaning: 4,
            duplicates_removed: 1,
            rows_final: 3,
            summary: FundingSummary {
                record_count: 3,
                total_funding: 3_000_000.0,
                avg_funding: 1_000_000.0,
                top_startups: vec![GroupTotal {
                    name: "Flipkart".into(),
                    total: 3_000_000.0,
                }],
                top_industries: vec![],
                funding_trend: vec![],
            },
        }
    }

    #[test]
    fn test_summary_text() {
        let text = summary_text(&report());
        assert!(text.contains("Removed 1 duplicate rows."));
        assert!(text.contains("Total Funding: $3,000,000"));
        assert!(text.contains("Average Funding per Deal: $1,000,000"));
        assert!(text.contains("  1. Flipkart  $3,000,000"));
        assert!(text.contains("Top 10 Industries by Funding:\n  (none)"));
    }

    #[test]
    fn test_stage_preview_lists_columns() {
        let df = df!("startup_name" => ["Ola"], "amount_in_usd" => ["1"]).unwrap();
        let text = stage_preview(Stage::ColumnsNormalized, &df, 5);
        assert!(text.contains("startup_name, amount_in_usd"));
    }
}
