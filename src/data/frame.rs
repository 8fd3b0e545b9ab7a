//! Column extraction helpers shared by the cleaning stages and the calculator.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Polars stores dates as days since the Unix epoch.
pub fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

/// Read a column as optional strings, casting non-string columns first.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let ca = column.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Read a numeric column as `f64`; nulls are reported as `None`.
pub fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    let ca = column.f64()?;
    Ok(ca.into_iter().collect())
}

/// Read a `Date` column back into calendar dates.
pub fn date_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<NaiveDate>>> {
    let column = df.column(name)?;
    if column.dtype() != &DataType::Date {
        return Err(PolarsError::SchemaMismatch(
            format!("column \"{}\" is {}, expected date", name, column.dtype()).into(),
        ));
    }
    let days = column.cast(&DataType::Int32)?;
    let ca = days.i32()?;
    Ok(ca
        .into_iter()
        .map(|d| d.and_then(date_from_epoch_days))
        .collect())
}

/// Build a `Date` column from calendar dates.
pub fn date_column_from(name: &str, dates: &[Option<NaiveDate>]) -> PolarsResult<Column> {
    let days: Vec<Option<i32>> = dates.iter().map(|d| d.map(epoch_days)).collect();
    Column::new(name.into(), days).cast(&DataType::Date)
}
