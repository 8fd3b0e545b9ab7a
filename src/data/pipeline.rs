//! Pipeline driver: threads the table through the cleaning stages in order.

use crate::data::processor::{DataProcessor, Deduplicated, ProcessorError};
use polars::prelude::*;
use std::fmt;
use tracing::info;

/// A point in the pipeline at which the table can be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    ColumnsNormalized,
    DatesCleaned,
    NullsFilled,
    AmountsCleaned,
    Deduplicated,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Loaded => "Initial Data",
            Stage::ColumnsNormalized => "Standardized Columns",
            Stage::DatesCleaned => "Data after Date Cleaning",
            Stage::NullsFilled => "Data after Handling Null Values",
            Stage::AmountsCleaned => "Data after Cleaning Amount Format",
            Stage::Deduplicated => "Data after Removing Duplicates",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The cleaned table plus the row counts observed along the way.
#[derive(Debug)]
pub struct CleanedTable {
    pub table: DataFrame,
    pub rows_loaded: usize,
    pub rows_after_date_cleaning: usize,
    pub duplicates_removed: usize,
}

/// Run every cleaning stage over `df`, calling `on_stage` with the table as it
/// stands after each one.
pub fn clean_table<F>(df: DataFrame, mut on_stage: F) -> Result<CleanedTable, ProcessorError>
where
    F: FnMut(Stage, &DataFrame),
{
    let rows_loaded = df.height();
    on_stage(Stage::Loaded, &df);

    let df = DataProcessor::normalize_columns(df)?;
    on_stage(Stage::ColumnsNormalized, &df);

    let df = DataProcessor::clean_dates(df)?;
    let rows_after_date_cleaning = df.height();
    info!(
        rows = rows_after_date_cleaning,
        dropped = rows_loaded - rows_after_date_cleaning,
        "date cleaning done"
    );
    on_stage(Stage::DatesCleaned, &df);

    let df = DataProcessor::fill_nulls(df)?;
    on_stage(Stage::NullsFilled, &df);

    let df = DataProcessor::clean_amounts(df)?;
    on_stage(Stage::AmountsCleaned, &df);

    let Deduplicated { table, removed } = DataProcessor::drop_duplicates(df)?;
    on_stage(Stage::Deduplicated, &table);

    Ok(CleanedTable {
        table,
        rows_loaded,
        rows_after_date_cleaning,
        duplicates_removed: removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_run_in_order() {
        let df = df!(
            "Startup Name" => ["Ola", "Ola", "Byju's"],
            "Industry Vertical" => ["Transport", "Transport", "EdTech"],
            "Date dd/mm/yyyy" => ["01/08/2017", "01/08/2017", "bad"],
            "Investors Name" => ["SoftBank", "SoftBank", "Tencent"],
            "Amount in USD" => ["100", "100", "50"]
        )
        .unwrap();

        let mut seen = Vec::new();
        let cleaned = clean_table(df, |stage, table| seen.push((stage, table.height()))).unwrap();

        assert_eq!(
            seen,
            vec![
                (Stage::Loaded, 3),
                (Stage::ColumnsNormalized, 3),
                (Stage::DatesCleaned, 2),
                (Stage::NullsFilled, 2),
                (Stage::AmountsCleaned, 2),
                (Stage::Deduplicated, 1),
            ]
        );
        assert_eq!(cleaned.rows_loaded, 3);
        assert_eq!(cleaned.rows_after_date_cleaning, 2);
        assert_eq!(cleaned.duplicates_removed, 1);
        assert_eq!(cleaned.table.height(), 1);
    }
}
