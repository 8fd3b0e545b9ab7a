//! Static Chart Renderer
//! Writes the funding charts as PNG files with plotters.
//!
//! Charts:
//! 1. `funding_trend.png`: monthly totals as a line with point markers
//! 2. `top_startups.png`: top startups by total funding, vertical bars
//! 3. `top_industries.png`: top industries by total funding, vertical bars

use crate::report::format_usd;
use crate::stats::{FundingSummary, GroupTotal, MonthlyTotal};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const LINE_SIZE: (u32, u32) = (1200, 600);
const BAR_SIZE: (u32, u32) = (1000, 650);

const LINE_COLOR: RGBColor = RGBColor(52, 152, 219); // Blue
const BAR_COLOR: RGBColor = RGBColor(46, 204, 113); // Green

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create chart directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to draw chart {}: {}", .path.display(), .message)]
    Draw { path: PathBuf, message: String },
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render all three charts into `out_dir`, returning the files written.
    ///
    /// Nothing is drawn when the summary has no records.
    pub fn render_all(summary: &FundingSummary, out_dir: &Path) -> Result<Vec<PathBuf>, ChartError> {
        if summary.record_count == 0 {
            warn!("no records left after cleaning, skipping charts");
            return Ok(Vec::new());
        }
        fs::create_dir_all(out_dir)?;

        let trend = out_dir.join("funding_trend.png");
        Self::draw_trend_chart(&summary.funding_trend, &trend)?;

        let startups = out_dir.join("top_startups.png");
        Self::draw_bar_chart("Top 10 Startups by Funding", &summary.top_startups, &startups)?;

        let industries = out_dir.join("top_industries.png");
        Self::draw_bar_chart(
            "Top 10 Industries by Funding",
            &summary.top_industries,
            &industries,
        )?;

        let written = vec![trend, startups, industries];
        info!(dir = %out_dir.display(), charts = written.len(), "charts written");
        Ok(written)
    }

    fn y_upper(max: f64) -> f64 {
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Line chart of monthly funding, one x position per month.
    pub fn draw_trend_chart(trend: &[MonthlyTotal], path: &Path) -> Result<(), ChartError> {
        let fail = |e: &dyn std::fmt::Display| ChartError::Draw {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let labels: Vec<String> = trend.iter().map(|m| m.month.to_string()).collect();
        let max = trend.iter().map(|m| m.total).fold(0.0, f64::max);
        let last = (trend.len() as i32 - 1).max(1);

        let root = BitMapBackend::new(path, LINE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| fail(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Funding Trend Over Time", ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(120)
            .build_cartesian_2d(0i32..last, 0f64..Self::y_upper(max))
            .map_err(|e| fail(&e))?;

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Funding Amount ($)")
            .x_labels(labels.len().clamp(2, 24))
            .x_label_formatter(&|x| {
                usize::try_from(*x)
                    .ok()
                    .and_then(|i| labels.get(i).cloned())
                    .unwrap_or_default()
            })
            .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
            .y_label_formatter(&|y| format_usd(*y))
            .draw()
            .map_err(|e| fail(&e))?;

        chart
            .draw_series(LineSeries::new(
                trend.iter().enumerate().map(|(i, m)| (i as i32, m.total)),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(|e| fail(&e))?;

        chart
            .draw_series(
                trend
                    .iter()
                    .enumerate()
                    .map(|(i, m)| Circle::new((i as i32, m.total), 4, LINE_COLOR.filled())),
            )
            .map_err(|e| fail(&e))?;

        root.present().map_err(|e| fail(&e))?;
        Ok(())
    }

    /// Bar chart of group totals, in the order given.
    pub fn draw_bar_chart(title: &str, groups: &[GroupTotal], path: &Path) -> Result<(), ChartError> {
        let fail = |e: &dyn std::fmt::Display| ChartError::Draw {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let max = groups.iter().map(|g| g.total).fold(0.0, f64::max);
        let n = groups.len().max(1) as i32;

        let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| fail(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(160)
            .y_label_area_size(120)
            .build_cartesian_2d((0..n).into_segmented(), 0f64..Self::y_upper(max))
            .map_err(|e| fail(&e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Total Funding ($)")
            .x_labels(groups.len().max(1))
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
                    .ok()
                    .and_then(|i| groups.get(i))
                    .map(|g| g.name.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
            .y_label_formatter(&|y| format_usd(*y))
            .draw()
            .map_err(|e| fail(&e))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(12)
                    .data(groups.iter().enumerate().map(|(i, g)| (i as i32, g.total))),
            )
            .map_err(|e| fail(&e))?;

        root.present().map_err(|e| fail(&e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::YearMonth;

    #[test]
    fn test_empty_summary_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let summary = FundingSummary {
            record_count: 0,
            total_funding: 0.0,
            avg_funding: f64::NAN,
            top_startups: vec![],
            top_industries: vec![],
            funding_trend: vec![],
        };
        let written = StaticChartRenderer::render_all(&summary, &out).unwrap();
        assert!(written.is_empty());
        assert!(!out.exists());
    }

    fn fonts_available() -> bool {
        ("sans-serif", 12).into_font().box_size("$0").is_ok()
    }

    fn single_month_summary() -> FundingSummary {
        FundingSummary {
            record_count: 2,
            total_funding: 1500.0,
            avg_funding: 750.0,
            top_startups: vec![
                GroupTotal { name: "Ola".into(), total: 1000.0 },
                GroupTotal { name: "Unknown".into(), total: 500.0 },
            ],
            top_industries: vec![GroupTotal { name: "Transport".into(), total: 1500.0 }],
            funding_trend: vec![MonthlyTotal {
                month: YearMonth { year: 2020, month: 1 },
                total: 1500.0,
            }],
        }
    }

    #[test]
    fn test_render_all_single_month() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let written = StaticChartRenderer::render_all(&single_month_summary(), &out).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["funding_trend.png", "top_startups.png", "top_industries.png"]);
        for path in &written {
            assert!(fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_bar_chart_without_groups() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_bars.png");
        StaticChartRenderer::draw_bar_chart("Nothing", &[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_y_upper_has_headroom() {
        assert_eq!(StaticChartRenderer::y_upper(0.0), 1.0);
        assert!(StaticChartRenderer::y_upper(100.0) > 100.0);
    }
}
