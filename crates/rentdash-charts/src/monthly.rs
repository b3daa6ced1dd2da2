//! Monthly totals line chart over the canonical 12-month axis

use crate::style::{ChartStyle, TAB_PALETTE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rentdash_common::{format_count, Result};
use rentdash_data::MonthlyTotal;
use std::path::Path;
use tracing::info;

fn month_abbr(total: &MonthlyTotal) -> &'static str {
    &total.month.name()[..3]
}

/// Render the monthly rentals line chart.
///
/// The input is expected in canonical Jan..Dec order (zero-filled for
/// absent months); each point is annotated with its value.
pub fn render_monthly_rentals(
    totals: &[MonthlyTotal],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;

    let y_max = totals.iter().map(|m| m.total).max().unwrap_or(0).max(1) as f64 * 1.15;
    let x_max = totals.len().max(1) as f64 - 0.5;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Rentals", (font, 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    let x_fmt = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 0.25 {
            return String::new();
        }
        totals
            .get(slot as usize)
            .map(month_abbr)
            .unwrap_or_default()
            .to_string()
    };
    chart
        .configure_mesh()
        .x_labels(totals.len().max(2))
        .x_label_formatter(&x_fmt)
        .y_desc("Total Rentals")
        .label_style((font, 16))
        .axis_desc_style((font, 20))
        .draw()?;

    if !totals.is_empty() {
        let line_color = TAB_PALETTE[0];
        chart.draw_series(LineSeries::new(
            totals
                .iter()
                .enumerate()
                .map(|(i, m)| (i as f64, m.total as f64)),
            line_color.stroke_width(2),
        ))?;
        chart.draw_series(
            totals
                .iter()
                .enumerate()
                .map(|(i, m)| Circle::new((i as f64, m.total as f64), 4, line_color.filled())),
        )?;

        let annotation = (font, 15)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(totals.iter().enumerate().map(|(i, m)| {
            Text::new(
                format_count(m.total),
                (i as f64, m.total as f64 + y_max * 0.01),
                annotation.clone(),
            )
        }))?;
    }

    root.present()?;
    info!(panel = "monthly", path = %path.display(), "chart rendered");
    Ok(())
}
