//! Data Processor Module
//! The fixed cleaning stages applied to the funding table, in order:
//! column normalization, date cleaning, null filling, amount cleaning and
//! deduplication. Each stage takes the table by value and returns the result.

use crate::data::frame::{date_column_from, date_values, f64_values, string_values};
use crate::data::schema::{
    self, AMOUNT_IN_USD, DATE_FORMAT, INDUSTRY_VERTICAL, INVESTORS_NAME, STARTUP_NAME, UNKNOWN,
};
use crate::data::text::{normalize_column_name, parse_amount, title_case};
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Result of the deduplication stage.
#[derive(Debug)]
pub struct Deduplicated {
    pub table: DataFrame,
    pub removed: usize,
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Standardize every column identifier (trim, lowercase, spaces to underscores).
    pub fn normalize_columns(mut df: DataFrame) -> Result<DataFrame, ProcessorError> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| normalize_column_name(name.as_str()))
            .collect();
        df.set_column_names(names)?;
        Ok(df)
    }

    /// Parse a day/month/year date, `None` when the text is not a real date.
    ///
    /// The year must be written with exactly four digits; `%Y` alone would
    /// read `01/07/015` as the year 15.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        let (_, year) = value.rsplit_once('/')?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
    }

    /// Parse the date column and drop every row whose date does not parse.
    pub fn clean_dates(mut df: DataFrame) -> Result<DataFrame, ProcessorError> {
        let date_col = schema::date_column(&df)?;
        let parsed: Vec<Option<NaiveDate>> = string_values(&df, date_col)?
            .iter()
            .map(|v| v.as_deref().and_then(Self::parse_date))
            .collect();

        df.with_column(date_column_from(date_col, &parsed)?)?;

        let before = df.height();
        let df = df
            .lazy()
            .filter(col(date_col).is_not_null())
            .collect()?;

        let dropped = before - df.height();
        if before > 0 && df.height() == 0 {
            warn!(
                column = date_col,
                rows = before,
                "no date matched {DATE_FORMAT}, table is now empty"
            );
        } else {
            debug!(column = date_col, dropped, "dropped rows with invalid dates");
        }
        Ok(df)
    }

    /// Fill missing names and industries with `"Unknown"` and title-case them;
    /// fill missing amounts with `"0"`.
    pub fn fill_nulls(mut df: DataFrame) -> Result<DataFrame, ProcessorError> {
        for name in [STARTUP_NAME, INDUSTRY_VERTICAL] {
            let filled: Vec<String> = string_values(&df, name)?
                .iter()
                .map(|v| title_case(v.as_deref().unwrap_or(UNKNOWN).trim()))
                .collect();
            df.with_column(Column::new(name.into(), filled))?;
        }

        let amounts: Vec<String> = string_values(&df, AMOUNT_IN_USD)?
            .into_iter()
            .map(|v| v.unwrap_or_else(|| "0".to_string()))
            .collect();
        df.with_column(Column::new(AMOUNT_IN_USD.into(), amounts))?;

        Ok(df)
    }

    /// Strip everything but digits and periods from the amount and convert it
    /// to `f64`; unparsable amounts become zero.
    pub fn clean_amounts(mut df: DataFrame) -> Result<DataFrame, ProcessorError> {
        let raw = string_values(&df, AMOUNT_IN_USD)?;
        let mut coerced = 0usize;
        let amounts: Vec<f64> = raw
            .iter()
            .map(|v| {
                let text = v.as_deref().unwrap_or("0");
                let amount = parse_amount(text);
                if amount == 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0') {
                    coerced += 1;
                }
                amount
            })
            .collect();

        if coerced > 0 {
            debug!(coerced, "amounts with digits could not be parsed and were set to 0");
        }
        df.with_column(Column::new(AMOUNT_IN_USD.into(), amounts))?;
        Ok(df)
    }

    /// Drop rows repeating an earlier (startup name, date, investors, amount)
    /// tuple, keeping the first occurrence.
    pub fn drop_duplicates(df: DataFrame) -> Result<Deduplicated, ProcessorError> {
        let date_col = schema::date_column(&df)?;
        let names = string_values(&df, STARTUP_NAME)?;
        let dates = date_values(&df, date_col)?;
        let investors = string_values(&df, INVESTORS_NAME)?;
        let amounts = f64_values(&df, AMOUNT_IN_USD)?;

        let mut seen: HashSet<(Option<String>, Option<NaiveDate>, Option<String>, Option<u64>)> =
            HashSet::with_capacity(df.height());
        let keep: Vec<bool> = names
            .into_iter()
            .zip(dates)
            .zip(investors)
            .zip(amounts)
            .map(|(((name, date), investor), amount)| {
                // 0.0 and -0.0 must hash alike
                let amount = amount.map(|a| (a + 0.0).to_bits());
                seen.insert((name, date, investor, amount))
            })
            .collect();

        let removed = keep.iter().filter(|k| !**k).count();
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        let table = df.filter(&mask)?;

        info!(removed, rows = table.height(), "removed duplicate rows");
        Ok(Deduplicated { table, removed })
    }
}
