//! Funding Insights - Startup Funding CSV Cleaning & Aggregation
//!
//! Loads a startup funding CSV, runs it through a fixed cleaning pipeline and
//! computes funding totals, top-10 rankings and a monthly trend.

pub mod charts;
pub mod cli;
pub mod data;
pub mod logging;
pub mod report;
pub mod stats;
