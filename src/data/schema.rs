//! Expected column identifiers (post-normalization) and fixed cleaning constants.

use polars::prelude::*;

pub const STARTUP_NAME: &str = "startup_name";
pub const INDUSTRY_VERTICAL: &str = "industry_vertical";
pub const INVESTORS_NAME: &str = "investors_name";
pub const AMOUNT_IN_USD: &str = "amount_in_usd";

/// Date column as named in the funding dataset (`Date dd/mm/yyyy`).
pub const DATE: &str = "date_dd/mm/yyyy";
/// Accepted when the dataset header is a bare `Date`.
pub const DATE_FALLBACK: &str = "date";

/// Day/month/year, four-digit year.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Fill value for missing names and industries.
pub const UNKNOWN: &str = "Unknown";

/// Resolve the date column of a normalized table.
pub fn date_column(df: &DataFrame) -> PolarsResult<&'static str> {
    let names = df.get_column_names();
    if names.iter().any(|n| n.as_str() == DATE) {
        Ok(DATE)
    } else if names.iter().any(|n| n.as_str() == DATE_FALLBACK) {
        Ok(DATE_FALLBACK)
    } else {
        Err(PolarsError::ColumnNotFound(
            format!("\"{DATE}\" (or \"{DATE_FALLBACK}\") not found").into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_column_prefers_dataset_name() {
        let df = df!(DATE => ["01/01/2020"], DATE_FALLBACK => ["x"]).unwrap();
        assert_eq!(date_column(&df).unwrap(), DATE);
    }

    #[test]
    fn test_date_column_fallback() {
        let df = df!(DATE_FALLBACK => ["01/01/2020"]).unwrap();
        assert_eq!(date_column(&df).unwrap(), DATE_FALLBACK);
    }

    #[test]
    fn test_date_column_missing() {
        let df = df!("when" => ["01/01/2020"]).unwrap();
        assert!(matches!(date_column(&df), Err(PolarsError::ColumnNotFound(_))));
    }
}
