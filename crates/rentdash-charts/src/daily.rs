//! Daily totals line chart

use crate::style::{ChartStyle, DAILY_LINE};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use rentdash_common::Result;
use rentdash_data::DailyPoint;
use std::path::Path;
use tracing::info;

/// Render the daily total users line chart.
///
/// The x axis shows roughly one label per 30 days, formatted `Month Year`.
pub fn render_daily_rentals(points: &[DailyPoint], style: &ChartStyle, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;

    let (x_min, mut x_max) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        // Empty range: keep an axis frame on screen instead of failing.
        _ => (
            NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid fallback date"),
            NaiveDate::from_ymd_opt(2000, 12, 31).expect("valid fallback date"),
        ),
    };
    if x_min == x_max {
        x_max = x_max + Duration::days(1);
    }
    let y_max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1) as f64 * 1.1;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption("Total Daily Users Over Time", (font, 28))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    // Thin the date ticks down to about one per 30 days.
    let label_count = (points.len() / 30).max(2);
    chart
        .configure_mesh()
        .x_labels(label_count)
        .x_label_formatter(&|d: &NaiveDate| d.format("%b %Y").to_string())
        .x_desc("Date")
        .y_desc("Total Users")
        .label_style((font, 16))
        .axis_desc_style((font, 20))
        .draw()?;

    if !points.is_empty() {
        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.date, p.value as f64)),
            DAILY_LINE.stroke_width(2),
        ))?;
    }

    root.present()?;
    info!(panel = "daily", path = %path.display(), points = points.len(), "chart rendered");
    Ok(())
}
