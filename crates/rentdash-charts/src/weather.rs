//! Rentals-by-weather-condition bar chart

use crate::style::ChartStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rentdash_common::{format_count, Result};
use rentdash_data::WeatherTotal;
use std::path::Path;
use tracing::info;

const BAR_HALF_WIDTH: f64 = 0.35;

/// Render the weather rentals chart: one bar per condition, one palette
/// colour per bar, each annotated with its value.
pub fn render_weather_rentals(
    conditions: &[WeatherTotal],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;

    let y_max = conditions.iter().map(|w| w.total).max().unwrap_or(0).max(1) as f64 * 1.15;
    let x_max = conditions.len().max(1) as f64 - 0.5;

    let font = style.font_family.as_str();
    let mut chart = ChartBuilder::on(&root)
        .caption("Weatherly Rentals", (font, 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    let x_fmt = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 0.25 {
            return String::new();
        }
        conditions
            .get(slot as usize)
            .map(|w| w.condition.clone())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(conditions.len().max(2))
        .x_label_formatter(&x_fmt)
        .label_style((font, 18))
        .draw()?;

    if !conditions.is_empty() {
        chart.draw_series(conditions.iter().enumerate().map(|(i, w)| {
            Rectangle::new(
                [
                    (i as f64 - BAR_HALF_WIDTH, 0.0),
                    (i as f64 + BAR_HALF_WIDTH, w.total as f64),
                ],
                ChartStyle::palette_color(i).filled(),
            )
        }))?;

        let annotation = (font, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(conditions.iter().enumerate().map(|(i, w)| {
            Text::new(
                format_count(w.total),
                (i as f64, w.total as f64 + y_max * 0.005),
                annotation.clone(),
            )
        }))?;
    }

    root.present()?;
    info!(panel = "weather", path = %path.display(), groups = conditions.len(), "chart rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_to_file() {
        let conditions = vec![
            WeatherTotal {
                condition: "Clear".to_string(),
                total: 500,
            },
            WeatherTotal {
                condition: "Misty".to_string(),
                total: 120,
            },
            WeatherTotal {
                condition: "Rain".to_string(),
                total: 30,
            },
        ];

        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.png");
        render_weather_rentals(&conditions, &ChartStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_empty_data_degrades() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_empty.png");
        render_weather_rentals(&[], &ChartStyle::default(), &path).unwrap();
        assert!(path.exists());
    }
}
