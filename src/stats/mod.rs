//! Stats module - Funding aggregates

mod calculator;

pub use calculator::{
    FundingCalculator, FundingSummary, GroupTotal, MonthlyTotal, StatsError, YearMonth, TOP_N,
};
