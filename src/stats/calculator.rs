//! Funding Calculator Module
//! Read-only aggregates over the cleaned funding table: totals, top-N groups
//! and the monthly funding trend.

use crate::data::frame::{date_values, f64_values, string_values};
use crate::data::schema::{self, AMOUNT_IN_USD, INDUSTRY_VERTICAL, STARTUP_NAME, UNKNOWN};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Number of groups kept in the top listings.
pub const TOP_N: usize = 10;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("column \"{0}\" contains nulls after cleaning")]
    UnexpectedNull(&'static str),
}

/// A calendar month bucket, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summed funding for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub name: String,
    pub total: f64,
}

/// Summed funding for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: f64,
}

/// Everything the presenters need.
#[derive(Debug, Clone, Serialize)]
pub struct FundingSummary {
    pub record_count: usize,
    pub total_funding: f64,
    /// NaN when there are no records.
    pub avg_funding: f64,
    pub top_startups: Vec<GroupTotal>,
    pub top_industries: Vec<GroupTotal>,
    pub funding_trend: Vec<MonthlyTotal>,
}

/// Computes funding aggregates.
pub struct FundingCalculator;

impl FundingCalculator {
    pub fn total_funding(amounts: &[f64]) -> f64 {
        amounts.iter().sum()
    }

    /// Total divided by record count; NaN for an empty slice.
    pub fn avg_funding(amounts: &[f64]) -> f64 {
        if amounts.is_empty() {
            return f64::NAN;
        }
        Self::total_funding(amounts) / amounts.len() as f64
    }

    /// Sum `amounts` per key, sort descending and keep the first `limit` groups.
    ///
    /// Equal sums keep the order in which their groups first appeared.
    pub fn top_groups(keys: &[String], amounts: &[f64], limit: usize) -> Vec<GroupTotal> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<GroupTotal> = Vec::new();

        for (key, amount) in keys.iter().zip(amounts) {
            match index.get(key.as_str()) {
                Some(&i) => groups[i].total += amount,
                None => {
                    index.insert(key.as_str(), groups.len());
                    groups.push(GroupTotal {
                        name: key.clone(),
                        total: *amount,
                    });
                }
            }
        }

        // sort_by is stable
        groups.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        groups.truncate(limit);
        groups
    }

    /// Sum `amounts` per calendar month, in chronological order.
    pub fn monthly_trend(dates: &[NaiveDate], amounts: &[f64]) -> Vec<MonthlyTotal> {
        let mut buckets: BTreeMap<YearMonth, f64> = BTreeMap::new();
        for (date, amount) in dates.iter().zip(amounts) {
            *buckets.entry(YearMonth::of(*date)).or_insert(0.0) += amount;
        }
        buckets
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect()
    }

    /// Compute every aggregate over a cleaned table.
    pub fn summarize(df: &DataFrame) -> Result<FundingSummary, StatsError> {
        let amounts: Vec<f64> = f64_values(df, AMOUNT_IN_USD)?
            .into_iter()
            .map(|v| v.ok_or(StatsError::UnexpectedNull(AMOUNT_IN_USD)))
            .collect::<Result<_, _>>()?;
        let startups = Self::text_keys(df, STARTUP_NAME)?;
        let industries = Self::text_keys(df, INDUSTRY_VERTICAL)?;

        let date_col = schema::date_column(df)?;
        let dates: Vec<NaiveDate> = date_values(df, date_col)?
            .into_iter()
            .map(|v| v.ok_or(StatsError::UnexpectedNull(date_col)))
            .collect::<Result<_, _>>()?;

        Ok(FundingSummary {
            record_count: df.height(),
            total_funding: Self::total_funding(&amounts),
            avg_funding: Self::avg_funding(&amounts),
            top_startups: Self::top_groups(&startups, &amounts, TOP_N),
            top_industries: Self::top_groups(&industries, &amounts, TOP_N),
            funding_trend: Self::monthly_trend(&dates, &amounts),
        })
    }

    fn text_keys(df: &DataFrame, name: &str) -> Result<Vec<String>, StatsError> {
        Ok(string_values(df, name)?
            .into_iter()
            .map(|v| v.unwrap_or_else(|| UNKNOWN.to_string()))
            .collect())
    }
}
