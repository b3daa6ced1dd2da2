//! Seasonal registered-vs-casual bar chart

use crate::style::{ChartStyle, TAB_PALETTE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rentdash_common::{format_count, Result};
use rentdash_data::SeasonTotals;
use std::path::Path;
use tracing::info;

const BAR_HALF_WIDTH: f64 = 0.35;

/// Render the seasonal rentals chart: per season, a registered bar with the
/// (smaller) casual bar overlaid on it, both annotated with their values.
pub fn render_seasonal_rentals(
    seasons: &[SeasonTotals],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;

    let y_max = seasons
        .iter()
        .map(|s| s.registered.max(s.casual))
        .max()
        .unwrap_or(0)
        .max(1) as f64
        * 1.15;
    let x_max = seasons.len().max(1) as f64 - 0.5;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption("Seasonly Rentals", (font, 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    let x_fmt = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 0.25 {
            return String::new();
        }
        seasons
            .get(slot as usize)
            .map(|s| s.season.clone())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(seasons.len().max(2))
        .x_label_formatter(&x_fmt)
        .label_style((font, 18))
        .draw()?;

    if !seasons.is_empty() {
        let registered_color = TAB_PALETTE[0];
        let casual_color = TAB_PALETTE[1];

        // Registered first, casual drawn over it.
        chart
            .draw_series(seasons.iter().enumerate().map(|(i, s)| {
                Rectangle::new(
                    [
                        (i as f64 - BAR_HALF_WIDTH, 0.0),
                        (i as f64 + BAR_HALF_WIDTH, s.registered as f64),
                    ],
                    registered_color.filled(),
                )
            }))?
            .label("Registered")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], registered_color.filled())
            });
        chart
            .draw_series(seasons.iter().enumerate().map(|(i, s)| {
                Rectangle::new(
                    [
                        (i as f64 - BAR_HALF_WIDTH, 0.0),
                        (i as f64 + BAR_HALF_WIDTH, s.casual as f64),
                    ],
                    casual_color.filled(),
                )
            }))?
            .label("Casual")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], casual_color.filled())
            });

        let annotation = (font, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(seasons.iter().enumerate().flat_map(|(i, s)| {
            [
                Text::new(
                    format_count(s.registered),
                    (i as f64, s.registered as f64 + y_max * 0.005),
                    annotation.clone(),
                ),
                Text::new(
                    format_count(s.casual),
                    (i as f64, s.casual as f64 + y_max * 0.005),
                    annotation.clone(),
                ),
            ]
        }))?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((font, 16))
            .draw()?;
    }

    root.present()?;
    info!(panel = "seasonal", path = %path.display(), groups = seasons.len(), "chart rendered");
    Ok(())
}
